//! Connection lifecycle of one board page.
//!
//! DESIGN
//! ======
//! `BoardSession` pairs the user-visible `ConnectionStatus` with the shared
//! `Backoff` counter so the loop asks one object what to do after a close.
//! A no-retry close moves the session to `Stopped`, which is terminal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use realtime::{Backoff, CloseReason, Reconnect, ReconnectPolicy};

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; waiting out a reconnect delay or not yet started.
    #[default]
    Disconnected,
    /// WebSocket handshake is in progress.
    Connecting,
    /// Socket is open and events are flowing.
    Connected,
    /// The server refused the session; no further attempts.
    Stopped,
}

/// Live connection state for the board shown on this page.
#[derive(Clone, Debug)]
pub struct BoardSession {
    pub board_slug: String,
    /// Socket URL derived from the page location.
    pub endpoint: String,
    pub policy: ReconnectPolicy,
    pub status: ConnectionStatus,
    /// Most recent close, if the socket has closed at least once.
    pub last_close: Option<CloseReason>,
    backoff: Backoff,
}

impl BoardSession {
    #[must_use]
    pub fn new(board_slug: impl Into<String>, endpoint: impl Into<String>, policy: ReconnectPolicy) -> Self {
        Self {
            board_slug: board_slug.into(),
            endpoint: endpoint.into(),
            policy,
            status: ConnectionStatus::Disconnected,
            last_close: None,
            backoff: Backoff::default(),
        }
    }

    /// Consecutive failed attempts since the last successful open.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.backoff.attempts()
    }

    pub fn on_connecting(&mut self) {
        self.status = ConnectionStatus::Connecting;
    }

    pub fn on_open(&mut self) {
        self.status = ConnectionStatus::Connected;
        self.backoff.on_open();
    }

    /// Record a close (or a failed attempt) and decide what happens next.
    pub fn on_close(&mut self, close: CloseReason) -> Reconnect {
        self.last_close = Some(close);
        let next = self.backoff.on_close(&self.policy, close);
        self.status = match next {
            Reconnect::After(_) => ConnectionStatus::Disconnected,
            Reconnect::Stop(_) => ConnectionStatus::Stopped,
        };
        next
    }
}
