//! Board socket client: connect, dispatch, reconnect.
//!
//! The loop runs on the browser's local executor for the lifetime of the
//! page. Each iteration owns one `WebSocket`; a close drops it and the next
//! iteration opens a fresh one after the delay chosen by `BoardSession`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures never escape the loop. A socket that cannot be
//! created, or does not open within the policy's timeout, counts as an
//! abnormal close (1006). Malformed or unknown events are logged and the
//! next frame is read as usual.

use std::pin::Pin;

use futures::future::{Either, select};
use futures::{Sink, StreamExt};
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::{Message, State, WebSocketError};
use realtime::{CloseReason, Dispatched, Dispatcher, Reconnect};

use crate::dom::htmx::HtmxPage;
use crate::state::session::BoardSession;

/// Spawn the connection loop for `session` on the local executor.
pub fn spawn_sync_client(session: BoardSession, dispatcher: Dispatcher) {
    wasm_bindgen_futures::spawn_local(sync_loop(session, dispatcher));
}

/// Main connection loop with reconnect logic.
async fn sync_loop(mut session: BoardSession, dispatcher: Dispatcher) {
    let Some(page) = HtmxPage::current() else {
        log::error!("live board: no document to patch");
        return;
    };

    loop {
        session.on_connecting();
        let close = connect_and_run(&mut session, &dispatcher, &page).await;

        match session.on_close(close) {
            Reconnect::After(delay) => {
                log::info!("board socket closed ({close}); reconnecting in {}ms", delay.as_millis());
                gloo_timers::future::sleep(delay).await;
            }
            Reconnect::Stop(close) => {
                log::warn!("board socket closed ({close}); server asked us not to reconnect");
                return;
            }
        }
    }
}

/// Open one socket and process frames until it closes.
async fn connect_and_run(session: &mut BoardSession, dispatcher: &Dispatcher, page: &HtmxPage) -> CloseReason {
    let mut ws = match WebSocket::open(&session.endpoint) {
        Ok(ws) => ws,
        Err(e) => {
            log::warn!("board socket could not be created: {e}");
            return CloseReason::abnormal();
        }
    };

    // The sink only becomes ready once the handshake has settled.
    let settled = {
        let ready = futures::future::poll_fn(|cx| Pin::new(&mut ws).poll_ready(cx));
        let timeout = gloo_timers::future::sleep(session.policy.open_timeout());
        matches!(select(Box::pin(ready), Box::pin(timeout)).await, Either::Left((Ok(()), _)))
    };
    if !settled {
        log::warn!("board socket did not open within {}ms", session.policy.open_timeout().as_millis());
        return CloseReason::abnormal();
    }
    if ws.state() == State::Open {
        session.on_open();
        log::info!("board socket open: {}", session.endpoint);
    }

    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => handle_text(dispatcher, page, &text),
            Ok(Message::Bytes(_)) => log::debug!("ignoring binary frame"),
            Err(WebSocketError::ConnectionClose(event)) => return CloseReason::with_code(event.code),
            Err(e) => log::debug!("board socket error: {e}"),
        }
    }
    CloseReason::abnormal()
}

fn handle_text(dispatcher: &Dispatcher, page: &HtmxPage, text: &str) {
    match dispatcher.dispatch(text, page) {
        Ok(Dispatched::Applied { action, missing }) => {
            if missing.is_empty() {
                log::debug!("{} applied", action.kind);
            } else {
                let ids: Vec<&str> = missing.iter().map(|id| id.as_str()).collect();
                log::debug!("{} applied; not on page: {}", action.kind, ids.join(", "));
            }
        }
        Ok(Dispatched::Suppressed { kind }) => log::debug!("skipping own {kind}"),
        Ok(Dispatched::Unknown { tag }) => log::warn!("unknown board event `{tag}`"),
        Err(e) => log::warn!("dropping malformed board event: {e}"),
    }
}
