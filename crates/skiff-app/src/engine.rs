//! WebKitGTK engine behind a wry web view
//!
//! wry owns the widget and handles loading. History, the current URI, zoom
//! and the `notify::uri` signal come from the underlying `webkit2gtk::WebView`,
//! which wry exposes on Linux.

use gtk::prelude::IsA;
use skiff_core::{ShellConfig, SkiffError, SkiffResult};
use skiff_shell::{UriChangedHandler, WebEngine};
use tracing::{debug, warn};
use webkit2gtk::WebViewExt;
use wry::{WebView, WebViewBuilder, WebViewBuilderExtUnix, WebViewExtUnix};

pub struct WryEngine {
    webview: WebView,
    inner: webkit2gtk::WebView,
    zoom_step: f64,
}

impl WryEngine {
    /// Create the web view and pack it into `container`, filling the
    /// remaining space.
    pub fn build<C>(container: &C, config: &ShellConfig) -> SkiffResult<Self>
    where
        C: IsA<gtk::Container>,
    {
        let webview = WebViewBuilder::new()
            .with_devtools(config.devtools)
            .build_gtk(container)
            .map_err(|e| SkiffError::webview(e.to_string()))?;
        let inner = webview.webview();

        Ok(Self {
            webview,
            inner,
            zoom_step: config.zoom_step,
        })
    }

    fn step_zoom(&self, delta: f64) {
        let level = next_zoom_level(self.inner.zoom_level(), delta);
        debug!("Zoom level {:.2}", level);
        self.inner.set_zoom_level(level);
    }
}

/// Smallest zoom level the view will go to
const MIN_ZOOM_LEVEL: f64 = 0.25;

fn next_zoom_level(current: f64, delta: f64) -> f64 {
    (current + delta).max(MIN_ZOOM_LEVEL)
}

impl WebEngine for WryEngine {
    fn load(&self, uri: &str) {
        if let Err(e) = self.webview.load_url(uri) {
            warn!("Failed to start loading {}: {}", uri, e);
        }
    }

    fn reload(&self) {
        if let Err(e) = self.webview.reload() {
            warn!("Failed to reload: {}", e);
        }
    }

    fn go_back(&self) {
        self.inner.go_back();
    }

    fn go_forward(&self) {
        self.inner.go_forward();
    }

    fn can_go_back(&self) -> bool {
        self.inner.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.inner.can_go_forward()
    }

    fn current_uri(&self) -> Option<String> {
        self.inner
            .uri()
            .map(|uri| uri.to_string())
            .filter(|uri| !uri.is_empty())
    }

    fn zoom_in(&self) {
        self.step_zoom(self.zoom_step);
    }

    fn zoom_out(&self) {
        self.step_zoom(-self.zoom_step);
    }

    fn connect_uri_changed(&self, handler: UriChangedHandler) {
        self.inner.connect_uri_notify(move |_| handler());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps_both_ways() {
        assert!((next_zoom_level(1.0, 0.1) - 1.1).abs() < 1e-9);
        assert!((next_zoom_level(1.0, -0.1) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_stops_at_minimum() {
        let mut level = 1.0;
        for _ in 0..50 {
            level = next_zoom_level(level, -0.1);
        }
        assert_eq!(level, MIN_ZOOM_LEVEL);
        assert!(next_zoom_level(MIN_ZOOM_LEVEL, -5.0) > 0.0);
    }
}
