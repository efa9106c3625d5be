//! Seams between the shell and the outside world
//!
//! [`WebEngine`] is the embedded browser engine: it owns loading, history and
//! zoom. [`ShellDisplay`] is the toolbar and address bar. The shell only ever
//! talks to these two traits, so it runs the same against GTK widgets and
//! against test doubles.
//!
//! Neither trait is `Send`. Widget handles live on the UI thread.

use skiff_core::{NavigationState, ShellCommand};
use std::rc::Rc;

/// Callback fired when the engine's current URI changes
pub type UriChangedHandler = Box<dyn Fn() + 'static>;

/// The embedded engine widget, as seen by the shell
pub trait WebEngine {
    /// Start loading a URI
    fn load(&self, uri: &str);

    /// Reload the current page from the engine's own state
    fn reload(&self);

    /// Go one entry back in history. A no-op when there is none.
    fn go_back(&self);

    /// Go one entry forward in history. A no-op when there is none.
    fn go_forward(&self);

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    /// The URI currently displayed, if any
    fn current_uri(&self) -> Option<String>;

    fn zoom_in(&self);

    fn zoom_out(&self);

    /// Subscribe to "URI changed" notifications, including ones caused by
    /// in-page navigation the shell never asked for.
    fn connect_uri_changed(&self, handler: UriChangedHandler);

    /// Snapshot of everything display-sync needs
    fn navigation_state(&self) -> NavigationState {
        NavigationState {
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
            uri: self.current_uri(),
        }
    }
}

impl<T: WebEngine> WebEngine for Rc<T> {
    fn load(&self, uri: &str) {
        (**self).load(uri)
    }

    fn reload(&self) {
        (**self).reload()
    }

    fn go_back(&self) {
        (**self).go_back()
    }

    fn go_forward(&self) {
        (**self).go_forward()
    }

    fn can_go_back(&self) -> bool {
        (**self).can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        (**self).can_go_forward()
    }

    fn current_uri(&self) -> Option<String> {
        (**self).current_uri()
    }

    fn zoom_in(&self) {
        (**self).zoom_in()
    }

    fn zoom_out(&self) {
        (**self).zoom_out()
    }

    fn connect_uri_changed(&self, handler: UriChangedHandler) {
        (**self).connect_uri_changed(handler)
    }
}

/// Toolbar buttons and the address bar
pub trait ShellDisplay {
    /// Current text in the address bar
    fn address_text(&self) -> String;

    fn set_address_text(&self, text: &str);

    /// Make a toolbar button clickable or greyed out
    fn set_command_enabled(&self, command: ShellCommand, enabled: bool);
}
