use realtime::EchoPolicy;

use super::*;
use crate::state::session::ConnectionStatus;

fn location(pathname: &str) -> PageLocation {
    PageLocation { protocol: "https:".to_owned(), host: "example.com".to_owned(), pathname: pathname.to_owned() }
}

fn config(slug: &str) -> PageConfig {
    PageConfig { board_slug: slug.to_owned(), ..PageConfig::default() }
}

#[test]
fn prepares_session_for_mounted_board() {
    let (session, dispatcher) = prepare_session(&config("abc"), &location("/jotlet/boards/abc/")).expect("session");
    assert_eq!(session.endpoint, "wss://example.com/jotlet/ws/boards/abc/");
    assert_eq!(session.board_slug, "abc");
    assert_eq!(session.status, ConnectionStatus::Disconnected);
    assert_eq!(dispatcher.board_slug(), "abc");
    assert_eq!(dispatcher.echo_policy(), &EchoPolicy::Off);
}

#[test]
fn echo_suppression_follows_page_settings() {
    let cfg = PageConfig { suppress_echo: true, session_key: Some("k1".to_owned()), ..config("abc") };
    let (_, dispatcher) = prepare_session(&cfg, &location("/boards/abc/")).expect("session");
    assert_eq!(dispatcher.echo_policy(), &EchoPolicy::SuppressOwn { session_key: "k1".to_owned() });
}

#[test]
fn unroutable_slug_fails_to_boot() {
    let err = prepare_session(&config("not a slug"), &location("/boards/x/")).expect_err("bad slug");
    assert!(matches!(err, BootError::Endpoint(EndpointError::InvalidSlug(_))));
}
