//! Menu bar with keyboard shortcuts for the shell commands

use muda::{
    accelerator::{Accelerator, Code, Modifiers},
    Menu, MenuId, MenuItem, Submenu,
};
use skiff_core::{ShellCommand, SkiffError, SkiffResult};
use tao::{platform::unix::WindowExtUnix, window::Window};
use tracing::debug;

/// What a menu item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    FocusAddressBar,
    Quit,
    Command(ShellCommand),
}

impl MenuAction {
    fn text(self) -> &'static str {
        match self {
            MenuAction::FocusAddressBar => "Open Location",
            MenuAction::Quit => "Quit",
            MenuAction::Command(ShellCommand::Back) => "Back",
            MenuAction::Command(ShellCommand::Forward) => "Forward",
            MenuAction::Command(ShellCommand::Refresh) => "Reload",
            MenuAction::Command(ShellCommand::ZoomIn) => "Zoom In",
            MenuAction::Command(ShellCommand::ZoomOut) => "Zoom Out",
        }
    }

    fn accelerator(self) -> Accelerator {
        let (modifiers, code) = match self {
            MenuAction::FocusAddressBar => (Modifiers::CONTROL, Code::KeyL),
            MenuAction::Quit => (Modifiers::CONTROL, Code::KeyQ),
            MenuAction::Command(ShellCommand::Back) => (Modifiers::ALT, Code::ArrowLeft),
            MenuAction::Command(ShellCommand::Forward) => (Modifiers::ALT, Code::ArrowRight),
            MenuAction::Command(ShellCommand::Refresh) => (Modifiers::CONTROL, Code::KeyR),
            MenuAction::Command(ShellCommand::ZoomIn) => (Modifiers::CONTROL, Code::Equal),
            MenuAction::Command(ShellCommand::ZoomOut) => (Modifiers::CONTROL, Code::Minus),
        };
        Accelerator::new(Some(modifiers), code)
    }
}

const FILE_ACTIONS: [MenuAction; 2] = [MenuAction::FocusAddressBar, MenuAction::Quit];

const NAVIGATE_ACTIONS: [MenuAction; 5] = [
    MenuAction::Command(ShellCommand::Back),
    MenuAction::Command(ShellCommand::Forward),
    MenuAction::Command(ShellCommand::Refresh),
    MenuAction::Command(ShellCommand::ZoomIn),
    MenuAction::Command(ShellCommand::ZoomOut),
];

/// The menu bar and the action behind each item
pub struct AppMenu {
    // Dropping the menu removes it from the window
    _menu: Menu,
    actions: Vec<(MenuId, MenuAction)>,
}

impl AppMenu {
    /// Build the menu bar and attach it to the top of the window
    pub fn install(window: &Window) -> SkiffResult<Self> {
        let menu = Menu::new();
        let mut actions = Vec::new();

        for (title, items) in [("File", &FILE_ACTIONS[..]), ("Navigate", &NAVIGATE_ACTIONS[..])] {
            let submenu = Submenu::new(title, true);
            for &action in items {
                let item = MenuItem::new(action.text(), true, Some(action.accelerator()));
                submenu.append(&item).map_err(|e| {
                    SkiffError::menu(format!("Failed to add {}: {}", action.text(), e))
                })?;
                actions.push((item.id().clone(), action));
            }
            menu.append(&submenu)
                .map_err(|e| SkiffError::menu(format!("Failed to append {} menu: {}", title, e)))?;
        }

        menu.init_for_gtk_window(window.gtk_window(), window.default_vbox())
            .map_err(|e| SkiffError::menu(format!("GTK init failed: {}", e)))?;

        debug!("Installed menu with {} items", actions.len());
        Ok(Self {
            _menu: menu,
            actions,
        })
    }

    pub fn action_for(&self, id: &MenuId) -> Option<MenuAction> {
        self.actions
            .iter()
            .find(|(item_id, _)| item_id == id)
            .map(|&(_, action)| action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_command_has_a_menu_item() {
        for command in ShellCommand::ALL {
            assert!(NAVIGATE_ACTIONS.contains(&MenuAction::Command(command)));
        }
    }

    #[test]
    fn test_accelerators_are_distinct() {
        let all: Vec<_> = FILE_ACTIONS.iter().chain(NAVIGATE_ACTIONS.iter()).collect();
        let accelerators: HashSet<_> = all.iter().map(|a| a.accelerator()).collect();
        assert_eq!(accelerators.len(), all.len());
    }
}
