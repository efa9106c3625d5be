//! Common types used throughout Skiff

/// A user command issued from the toolbar or the menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellCommand {
    Back,
    Forward,
    Refresh,
    ZoomIn,
    ZoomOut,
}

impl ShellCommand {
    /// Every command, in toolbar order
    pub const ALL: [ShellCommand; 5] = [
        ShellCommand::Back,
        ShellCommand::Forward,
        ShellCommand::Refresh,
        ShellCommand::ZoomIn,
        ShellCommand::ZoomOut,
    ];

    /// Button label, also used as the tooltip
    pub fn label(self) -> &'static str {
        match self {
            ShellCommand::Back => "Previous",
            ShellCommand::Forward => "Next",
            ShellCommand::Refresh => "Refresh",
            ShellCommand::ZoomIn => "Zoom in",
            ShellCommand::ZoomOut => "Zoom out",
        }
    }

    /// Freedesktop icon name
    pub fn icon_name(self) -> &'static str {
        match self {
            ShellCommand::Back => "edit-undo",
            ShellCommand::Forward => "edit-redo",
            ShellCommand::Refresh => "view-refresh",
            ShellCommand::ZoomIn => "zoom-in",
            ShellCommand::ZoomOut => "zoom-out",
        }
    }

    /// Whether the button's sensitivity follows the engine's history
    pub fn is_history(self) -> bool {
        matches!(self, ShellCommand::Back | ShellCommand::Forward)
    }
}

/// What the engine currently reports about navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub uri: Option<String>,
}

impl NavigationState {
    /// Text for the address bar: the URI, or empty when there is none
    pub fn address_text(&self) -> &str {
        self.uri.as_deref().unwrap_or("")
    }

    /// Whether the given history command should be clickable
    pub fn allows(&self, command: ShellCommand) -> bool {
        match command {
            ShellCommand::Back => self.can_go_back,
            ShellCommand::Forward => self.can_go_forward,
            _ => true,
        }
    }
}
