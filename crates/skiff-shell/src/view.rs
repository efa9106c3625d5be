//! The view container: the one engine instance the shell shows

use crate::engine::{UriChangedHandler, WebEngine};

/// Page every new view starts on
pub const HOME_URI: &str = "http://www.google.com/";

/// Owns a single engine widget.
///
/// Built once when the shell starts and dropped with it.
pub struct ViewContainer<E: WebEngine> {
    engine: E,
}

impl<E: WebEngine> ViewContainer<E> {
    /// Load [`HOME_URI`] and route the engine's URI-changed notification to
    /// `on_uri_changed`.
    pub fn new(engine: E, on_uri_changed: UriChangedHandler) -> Self {
        log::info!("Creating view, start page {}", HOME_URI);
        engine.load(HOME_URI);
        engine.connect_uri_changed(on_uri_changed);
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
