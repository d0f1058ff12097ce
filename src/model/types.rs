//! Shared types for the Model

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VimCommandState {
    #[default]
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Where keystrokes go
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Scrolling and section hotkeys
    #[default]
    Page,
    /// Collapsed navigation menu is open
    Menu,
    /// Typing into the contact form
    Form,
}
