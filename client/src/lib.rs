//! # client
//!
//! Browser host for live board updates. Loaded as a WASM module on the
//! server-rendered board page, it keeps one socket open to the board's
//! realtime endpoint and patches the page as board events arrive.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is rendered by the server and enhanced by htmx. This crate never
//! renders markup itself: it finds elements by id, swaps in server-rendered
//! fragments through `htmx.ajax`, and fires htmx events so the page's own
//! `hx-trigger` handlers refresh the affected parts. Event decoding and the
//! dispatch table live in the shared `realtime` crate.
//!
//! All browser bindings are gated behind `#[cfg(feature = "hydrate")]`; the
//! remaining logic builds and tests natively.

pub mod dom;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// WASM entry point: wire up console logging and start the board socket.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match util::boot::load_session() {
        Ok((session, dispatcher)) => {
            log::info!("live board: {} via {}", session.board_slug, session.endpoint);
            net::sync_client::spawn_sync_client(session, dispatcher);
        }
        Err(e) => log::error!("live board disabled: {e}"),
    }
}
