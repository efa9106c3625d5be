//! Browser shell - toolbar, address bar and the single web view
//!
//! The shell turns user intent (button clicks, address bar submits) into
//! calls on the embedded engine and keeps the toolbar and address bar in step
//! with what the engine reports. Loading, history and zoom all belong to the
//! engine; failures are surfaced by the engine itself and never intercepted
//! here.

pub mod address;
pub mod engine;
pub mod view;

pub use address::{normalize_address, DEFAULT_SCHEME};
pub use engine::{ShellDisplay, UriChangedHandler, WebEngine};
pub use view::{ViewContainer, HOME_URI};

use skiff_core::ShellCommand;

pub struct BrowserShell<E: WebEngine, D: ShellDisplay> {
    view: ViewContainer<E>,
    display: D,
    sync_count: u64,
}

impl<E: WebEngine, D: ShellDisplay> BrowserShell<E, D> {
    /// Build the shell around `engine`, load the start page and sync the
    /// display once.
    ///
    /// `on_uri_changed` fires whenever the engine's URI changes. It should
    /// arrange for [`BrowserShell::on_uri_changed`] to be called once the
    /// current handler has returned; calling back into the shell from inside
    /// the engine callback is not supported.
    pub fn new(display: D, engine: E, on_uri_changed: UriChangedHandler) -> Self {
        log::info!("Initializing browser shell");

        let view = ViewContainer::new(engine, on_uri_changed);
        let mut shell = Self {
            view,
            display,
            sync_count: 0,
        };
        shell.update();
        shell
    }

    /// The current (and only) view
    pub fn view(&self) -> &ViewContainer<E> {
        &self.view
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// How many times display-sync has run
    pub fn sync_count(&self) -> u64 {
        self.sync_count
    }

    /// Load whatever is typed in the address bar
    pub fn navigate_from_address_bar(&mut self) {
        let text = self.display.address_text();
        self.navigate(&text);
    }

    /// Load `text`, assuming plain HTTP when it names no scheme
    pub fn navigate(&mut self, text: &str) {
        let uri = normalize_address(text);
        log::info!("Navigating to {}", uri);
        self.view.engine().load(&uri);
        self.update();
    }

    pub fn back(&mut self) {
        log::debug!("Going back");
        self.view.engine().go_back();
        self.update();
    }

    pub fn forward(&mut self) {
        log::debug!("Going forward");
        self.view.engine().go_forward();
        self.update();
    }

    /// Load the current URI again
    pub fn refresh(&mut self) {
        let engine = self.view.engine();
        match engine.current_uri() {
            Some(uri) => {
                log::debug!("Refreshing {}", uri);
                engine.load(&uri);
            }
            None => log::debug!("Nothing to refresh"),
        }
        self.update();
    }

    pub fn zoom_in(&self) {
        self.view.engine().zoom_in();
    }

    pub fn zoom_out(&self) {
        self.view.engine().zoom_out();
    }

    /// Run a toolbar or menu command
    pub fn dispatch(&mut self, command: ShellCommand) {
        match command {
            ShellCommand::Back => self.back(),
            ShellCommand::Forward => self.forward(),
            ShellCommand::Refresh => self.refresh(),
            ShellCommand::ZoomIn => self.zoom_in(),
            ShellCommand::ZoomOut => self.zoom_out(),
        }
    }

    /// The engine reported a new URI, e.g. after a link click
    pub fn on_uri_changed(&mut self) {
        self.update();
    }

    /// Display-sync: copy the engine's history flags into the Back/Forward
    /// buttons and its URI into the address bar.
    pub fn update(&mut self) {
        let state = self.view.engine().navigation_state();

        for command in ShellCommand::ALL.into_iter().filter(|c| c.is_history()) {
            self.display.set_command_enabled(command, state.allows(command));
        }
        self.display.set_address_text(state.address_text());

        self.sync_count += 1;
        log::trace!(
            "Synced display: back={} forward={} uri={:?}",
            state.can_go_back,
            state.can_go_forward,
            state.uri
        );
    }
}
