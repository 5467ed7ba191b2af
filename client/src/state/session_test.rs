use std::time::Duration;

use super::*;

fn session() -> BoardSession {
    BoardSession::new("abc", "wss://example.com/ws/boards/abc/", ReconnectPolicy::default())
}

#[test]
fn new_session_starts_disconnected() {
    let s = session();
    assert_eq!(s.status, ConnectionStatus::Disconnected);
    assert_eq!(s.attempts(), 0);
    assert_eq!(s.last_close, None);
}

#[test]
fn open_marks_connected_and_clears_attempts() {
    let mut s = session();
    s.on_connecting();
    assert_eq!(s.status, ConnectionStatus::Connecting);
    s.on_close(CloseReason::abnormal());
    s.on_connecting();
    s.on_open();
    assert_eq!(s.status, ConnectionStatus::Connected);
    assert_eq!(s.attempts(), 0);
}

#[test]
fn abnormal_closes_back_off_on_schedule() {
    let mut s = session();
    assert_eq!(s.on_close(CloseReason::abnormal()), Reconnect::After(Duration::ZERO));
    assert_eq!(s.on_close(CloseReason::abnormal()), Reconnect::After(Duration::from_millis(3_000)));
    assert_eq!(s.status, ConnectionStatus::Disconnected);
    assert_eq!(s.last_close, Some(CloseReason::abnormal()));
}

#[test]
fn policy_violation_stops_the_session() {
    let mut s = session();
    s.on_open();
    let close = CloseReason::with_code(1008);
    assert_eq!(s.on_close(close), Reconnect::Stop(close));
    assert_eq!(s.status, ConnectionStatus::Stopped);
}
