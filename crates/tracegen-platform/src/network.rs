//! Outbound network transmission executor.

use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs, UdpSocket};

use chrono::Utc;
use tracegen_events::ActivityRecord;
use tracegen_sink::ActivitySink;
use tracing::debug;

use crate::error::ActionError;
use crate::identity;

/// Outcome of a completed transmission, including the local endpoint
/// the OS actually bound for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub host: String,
    pub port: u16,
    pub source_address: String,
    pub source_port: u16,
    pub bytes_sent: u64,
}

/// Transmit `data` to `destination:port` over the given protocol and
/// log a `network_activity` record.
///
/// The protocol string is matched case-insensitively against `tcp` and
/// `udp` before any socket is opened; the record stores the caller's
/// casing verbatim. `data_sent` is the byte length of the payload.
/// Nothing is logged if the transmission fails.
pub(crate) fn send_network_activity(
    sink: &ActivitySink,
    destination: &str,
    port: u16,
    protocol: &str,
    data: &str,
) -> Result<NetworkSummary, ActionError> {
    let lowered = protocol.to_ascii_lowercase();
    if lowered != "tcp" && lowered != "udp" {
        return Err(ActionError::InvalidProtocol(protocol.to_string()));
    }

    let timestamp = Utc::now();
    let payload = data.as_bytes();

    let local = if lowered == "tcp" {
        send_tcp(destination, port, payload)?
    } else {
        send_udp(destination, port, payload)?
    };
    debug!(
        destination,
        port,
        protocol = %lowered,
        bytes = payload.len(),
        "transmitted payload"
    );

    let actor = identity::resolve_actor()?;
    let record = ActivityRecord::network_activity(
        timestamp,
        destination,
        port,
        protocol,
        payload.len() as u64,
        local.ip().to_string(),
        local.port(),
        actor,
    );
    sink.append(&record)?;

    Ok(NetworkSummary {
        host: destination.to_string(),
        port,
        source_address: local.ip().to_string(),
        source_port: local.port(),
        bytes_sent: payload.len() as u64,
    })
}

fn send_tcp(destination: &str, port: u16, payload: &[u8]) -> Result<SocketAddr, ActionError> {
    let mut stream =
        TcpStream::connect((destination, port)).map_err(|e| network_error(destination, port, e))?;
    stream
        .write_all(payload)
        .map_err(|e| network_error(destination, port, e))?;
    // The source endpoint is fixed once the connection is established.
    let local = stream
        .local_addr()
        .map_err(|e| network_error(destination, port, e))?;
    Ok(local)
}

fn send_udp(destination: &str, port: u16, payload: &[u8]) -> Result<SocketAddr, ActionError> {
    let target = (destination, port)
        .to_socket_addrs()
        .map_err(|e| network_error(destination, port, e))?
        .next()
        .ok_or_else(|| {
            network_error(
                destination,
                port,
                std::io::Error::new(std::io::ErrorKind::Other, "destination did not resolve"),
            )
        })?;

    let bind_addr = if target.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
    let socket = UdpSocket::bind(bind_addr).map_err(|e| network_error(destination, port, e))?;
    socket
        .send_to(payload, target)
        .map_err(|e| network_error(destination, port, e))?;
    // The ephemeral source port is only meaningful once a datagram has
    // gone out, so the local endpoint is sampled after the send.
    let local = socket
        .local_addr()
        .map_err(|e| network_error(destination, port, e))?;
    Ok(local)
}

fn network_error(destination: &str, port: u16, source: std::io::Error) -> ActionError {
    ActionError::Network {
        destination: format!("{destination}:{port}"),
        source,
    }
}
