//! Networking for the live board socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `sync_client` manages the websocket lifecycle and feeds each text frame
//! to the shared dispatcher.

#[cfg(feature = "hydrate")]
pub mod sync_client;
