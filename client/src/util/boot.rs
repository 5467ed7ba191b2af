//! Page startup: read the board settings and derive the socket endpoint.
//!
//! The pure half (`prepare_session`) takes already-extracted page data so it
//! runs under native tests; `load_session` gathers that data from the live
//! document.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use realtime::{ConfigError, Dispatcher, EndpointError, PageConfig, PageLocation, ReconnectPolicy, board_endpoint};

use crate::state::session::BoardSession;

/// Reasons the live board cannot start on this page.
#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no browser window")]
    NoWindow,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}

/// Build the session and dispatcher for the board described by `config`.
///
/// # Errors
///
/// Returns [`BootError::Endpoint`] when the configured slug cannot be routed.
pub fn prepare_session(config: &PageConfig, location: &PageLocation) -> Result<(BoardSession, Dispatcher), BootError> {
    let endpoint = board_endpoint(location, &config.board_slug)?;
    let session = BoardSession::new(config.board_slug.clone(), endpoint, ReconnectPolicy::default());
    let dispatcher = Dispatcher::new(config.board_slug.clone(), config.echo_policy());
    Ok((session, dispatcher))
}

/// Read the page's JSON islands and location, then call [`prepare_session`].
///
/// # Errors
///
/// Returns a [`BootError`] when the page is not a board page or its
/// settings are unreadable.
#[cfg(feature = "hydrate")]
pub fn load_session() -> Result<(BoardSession, Dispatcher), BootError> {
    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoWindow)?;

    let config =
        PageConfig::from_islands(|id| document.get_element_by_id(id).and_then(|element| element.text_content()))?;

    let location = window.location();
    let location = PageLocation {
        protocol: location.protocol().unwrap_or_default(),
        host: location.host().unwrap_or_default(),
        pathname: location.pathname().unwrap_or_default(),
    };
    prepare_session(&config, &location)
}
