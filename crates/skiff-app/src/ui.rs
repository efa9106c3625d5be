//! GTK toolbar and address bar

use crate::UserEvent;
use gtk::prelude::*;
use skiff_core::ShellCommand;
use skiff_shell::ShellDisplay;
use tao::event_loop::EventLoopProxy;

/// One button per command
struct Toolbar {
    back: gtk::ToolButton,
    forward: gtk::ToolButton,
    refresh: gtk::ToolButton,
    zoom_in: gtk::ToolButton,
    zoom_out: gtk::ToolButton,
}

impl Toolbar {
    fn button(&self, command: ShellCommand) -> &gtk::ToolButton {
        match command {
            ShellCommand::Back => &self.back,
            ShellCommand::Forward => &self.forward,
            ShellCommand::Refresh => &self.refresh,
            ShellCommand::ZoomIn => &self.zoom_in,
            ShellCommand::ZoomOut => &self.zoom_out,
        }
    }
}

/// The shell's widgets. Clicks and submits only post events; the event loop
/// hands them to the shell.
pub struct GtkDisplay {
    toolbar: Toolbar,
    address_bar: gtk::Entry,
}

impl GtkDisplay {
    /// Build the toolbar and the address bar and pack them into `container`
    pub fn build(container: &gtk::Box, proxy: &EventLoopProxy<UserEvent>) -> Self {
        let bar = gtk::Toolbar::new();
        let make_button = |command: ShellCommand| {
            let button = gtk::ToolButton::new(None::<&gtk::Widget>, Some(command.label()));
            button.set_icon_name(Some(command.icon_name()));
            button.set_tooltip_text(Some(command.label()));

            let proxy = proxy.clone();
            button.connect_clicked(move |_| {
                let _ = proxy.send_event(UserEvent::Command(command));
            });
            bar.insert(&button, -1);
            button
        };

        let toolbar = Toolbar {
            back: make_button(ShellCommand::Back),
            forward: make_button(ShellCommand::Forward),
            refresh: make_button(ShellCommand::Refresh),
            zoom_in: make_button(ShellCommand::ZoomIn),
            zoom_out: make_button(ShellCommand::ZoomOut),
        };
        container.pack_start(&bar, false, false, 0);

        let address_bar = gtk::Entry::new();
        let activate_proxy = proxy.clone();
        address_bar.connect_activate(move |_| {
            let _ = activate_proxy.send_event(UserEvent::AddressActivated);
        });
        container.pack_start(&address_bar, false, false, 0);

        Self {
            toolbar,
            address_bar,
        }
    }

    /// Put the cursor in the address bar with its text selected
    pub fn focus_address_bar(&self) {
        self.address_bar.grab_focus();
    }
}

impl ShellDisplay for GtkDisplay {
    fn address_text(&self) -> String {
        self.address_bar.text().to_string()
    }

    fn set_address_text(&self, text: &str) {
        self.address_bar.set_text(text);
    }

    fn set_command_enabled(&self, command: ShellCommand, enabled: bool) {
        self.toolbar.button(command).set_sensitive(enabled);
    }
}
