//! Integration tests driving the executors through the platform
//! adapter against real processes, files, and loopback sockets.

use std::net::{TcpListener, UdpSocket};
use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;
use test_case::test_case;
use tracegen_platform::{default_adapter, ActionError, Adapter};
use tracegen_sink::ActivitySink;

struct Fixture {
    _dir: TempDir,
    log: PathBuf,
    adapter: Box<dyn Adapter>,
    workdir: PathBuf,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("activity_log.jsonl");
    let adapter: Box<dyn Adapter> = Box::new(default_adapter(ActivitySink::new(&log)));
    let workdir = dir.path().to_path_buf();
    Fixture {
        _dir: dir,
        log,
        adapter,
        workdir,
    }
}

fn logged_records(log: &PathBuf) -> Vec<Value> {
    if !log.exists() {
        return Vec::new();
    }
    std::fs::read_to_string(log)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn create_modify_delete_logs_one_record_each() {
    let fx = fixture();
    let target = fx.workdir.join("a.txt");

    fx.adapter.create_file(&target).unwrap();
    fx.adapter.modify_file(&target).unwrap();
    fx.adapter.delete_file(&target).unwrap();

    assert!(!target.exists());

    let records = logged_records(&fx.log);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["type"], "file_creation");
    assert_eq!(records[0]["action"], "create");
    assert_eq!(records[1]["type"], "file_modification");
    assert_eq!(records[1]["action"], "modify");
    assert_eq!(records[2]["type"], "file_deletion");
    assert_eq!(records[2]["action"], "delete");
    for record in &records {
        assert_eq!(record["path"], target.to_string_lossy().as_ref());
        assert!(!record["username"].as_str().unwrap().is_empty());
        assert!(record["pid"].as_u64().unwrap() > 0);
    }
}

#[test]
fn modify_appends_a_timestamped_line() {
    let fx = fixture();
    let target = fx.workdir.join("m.txt");

    fx.adapter.create_file(&target).unwrap();
    fx.adapter.modify_file(&target).unwrap();

    let contents = std::fs::read_to_string(&target).unwrap();
    assert!(contents.starts_with("Modified at "));
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn create_truncates_an_existing_file() {
    let fx = fixture();
    let target = fx.workdir.join("t.txt");
    std::fs::write(&target, "previous contents").unwrap();

    fx.adapter.create_file(&target).unwrap();

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "");
}

#[test]
fn modify_missing_file_fails_and_logs_nothing() {
    let fx = fixture();
    let missing = fx.workdir.join("missing.txt");

    let err = fx.adapter.modify_file(&missing).unwrap_err();
    assert!(matches!(err, ActionError::NotFound { .. }));
    assert!(logged_records(&fx.log).is_empty());
}

#[test]
fn delete_missing_file_fails_and_logs_nothing() {
    let fx = fixture();
    let missing = fx.workdir.join("missing.txt");

    let err = fx.adapter.delete_file(&missing).unwrap_err();
    assert!(matches!(err, ActionError::NotFound { .. }));
    assert!(logged_records(&fx.log).is_empty());
}

#[cfg(unix)]
#[test]
fn start_process_logs_the_spawned_process() {
    let fx = fixture();
    let args = vec!["arg1".to_string(), "arg2".to_string()];

    let pid = fx.adapter.start_process("true", &args).unwrap();
    assert!(pid > 0);

    let records = logged_records(&fx.log);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["type"], "process_start");
    assert_eq!(records[0]["process_name"], "true");
    assert_eq!(records[0]["command_line"], "true arg1 arg2");
    assert_eq!(records[0]["pid"].as_u64().unwrap(), u64::from(pid));
    assert!(!records[0]["username"].as_str().unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn start_process_without_args_has_a_bare_command_line() {
    let fx = fixture();

    fx.adapter.start_process("/bin/true", &[]).unwrap();

    let records = logged_records(&fx.log);
    assert_eq!(records[0]["process_name"], "true");
    assert_eq!(records[0]["command_line"], "/bin/true");
}

#[test]
fn failed_spawn_logs_nothing() {
    let fx = fixture();

    let err = fx
        .adapter
        .start_process("/nonexistent/definitely-not-a-binary", &[])
        .unwrap_err();
    assert!(matches!(err, ActionError::Spawn { .. }));
    assert!(logged_records(&fx.log).is_empty());
}

#[test]
fn tcp_send_logs_the_actual_source_endpoint() {
    let fx = fixture();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    // Multi-byte payload: 5 characters, 6 bytes.
    let summary = fx
        .adapter
        .send_network_activity("127.0.0.1", port, "tcp", "héllo")
        .unwrap();
    assert_eq!(summary.bytes_sent, 6);
    assert!(summary.source_port > 0);

    let records = logged_records(&fx.log);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["type"], "network_activity");
    assert_eq!(records[0]["host"], "127.0.0.1");
    assert_eq!(records[0]["port"].as_u64().unwrap(), u64::from(port));
    assert_eq!(records[0]["data_sent"], 6);
    assert_eq!(records[0]["source_address"], "127.0.0.1");
    assert_eq!(
        records[0]["source_port"].as_u64().unwrap(),
        u64::from(summary.source_port)
    );
}

#[test]
fn udp_send_logs_the_post_send_source_endpoint() {
    let fx = fixture();
    let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = receiver.local_addr().unwrap().port();

    let summary = fx
        .adapter
        .send_network_activity("127.0.0.1", port, "udp", "hello")
        .unwrap();
    assert_eq!(summary.bytes_sent, 5);

    let mut buf = [0u8; 16];
    let (received, _) = receiver.recv_from(&mut buf).unwrap();
    assert_eq!(&buf[..received], b"hello");

    let records = logged_records(&fx.log);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["protocol"], "udp");
    assert_eq!(records[0]["data_sent"], 5);
    assert!(!records[0]["source_address"].as_str().unwrap().is_empty());
    assert!(records[0]["source_port"].as_u64().unwrap() > 0);
}

#[test_case("tcp"; "lowercase")]
#[test_case("TCP"; "uppercase")]
#[test_case("Tcp"; "mixed_case")]
fn protocol_casing_is_echoed_verbatim(protocol: &str) {
    let fx = fixture();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    fx.adapter
        .send_network_activity("127.0.0.1", port, protocol, "ping")
        .unwrap();

    let records = logged_records(&fx.log);
    assert_eq!(records[0]["protocol"], protocol);
}

#[test]
fn invalid_protocol_logs_nothing() {
    let fx = fixture();

    let err = fx
        .adapter
        .send_network_activity("example.com", 21, "ftp", "x")
        .unwrap_err();
    assert!(matches!(err, ActionError::InvalidProtocol(p) if p == "ftp"));
    assert!(logged_records(&fx.log).is_empty());
}

#[test]
fn unwritable_log_surfaces_after_the_side_effect() {
    let fx = fixture();
    // Point the sink at a directory so the append must fail.
    let adapter = default_adapter(ActivitySink::new(fx.workdir.clone()));
    let target = fx.workdir.join("effect.txt");

    let err = adapter.create_file(&target).unwrap_err();
    assert!(matches!(err, ActionError::LogWrite(_)));
    // The side effect still happened.
    assert!(target.exists());
}
