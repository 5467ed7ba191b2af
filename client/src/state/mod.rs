//! Client-side state for the live board connection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The connection loop owns a single `BoardSession` and updates it on every
//! lifecycle transition. Keeping the transitions here, away from browser
//! types, lets them run under native tests.

pub mod session;
