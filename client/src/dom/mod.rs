//! DOM adapters for the shared dispatch table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `htmx` implements `realtime::Hypermedia` against the live document and
//! the page's global `htmx` object.

#[cfg(feature = "hydrate")]
pub mod htmx;
