//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the collapsed menu, input focus and terminal size.

use super::types::{InputMode, VimCommandState};
use crate::logic::document::SectionId;
use crate::logic::layout::{is_narrow, page_viewport, Viewport};

/// UI preferences and visual state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    // ============================================
    // INPUT
    // ============================================
    pub input_mode: InputMode,

    /// Highlighted entry of the collapsed menu
    pub menu_selection: Option<usize>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Terminal size (width, height)
    pub terminal_size: (u16, u16),

    /// Page text area derived from the terminal size
    pub viewport: Viewport,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            input_mode: InputMode::Page,
            menu_selection: None,
            terminal_size: (80, 24),
            viewport: Viewport::default(),
            should_quit: false,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.viewport = page_viewport(width, height);
        if !self.is_narrow() && self.input_mode == InputMode::Menu {
            self.close_menu();
        }
    }

    pub fn is_narrow(&self) -> bool {
        is_narrow(self.terminal_size.0)
    }

    pub fn menu_open(&self) -> bool {
        self.input_mode == InputMode::Menu
    }

    pub fn form_focused(&self) -> bool {
        self.input_mode == InputMode::Form
    }

    /// Open the menu with `current` highlighted
    pub fn open_menu(&mut self, current: Option<SectionId>) {
        self.input_mode = InputMode::Menu;
        self.menu_selection = Some(current.map(SectionId::index).unwrap_or(0));
    }

    pub fn close_menu(&mut self) {
        self.input_mode = InputMode::Page;
        self.menu_selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(true);
        assert!(model.vim_mode);
        assert_eq!(model.input_mode, InputMode::Page);
        assert_eq!(model.viewport, Viewport::default());
        assert!(!model.should_quit);
    }

    #[test]
    fn test_menu_open_close() {
        let mut model = UiModel::new(false);
        model.resize(60, 24);

        model.open_menu(Some(SectionId::Events));
        assert!(model.menu_open());
        assert_eq!(model.menu_selection, Some(SectionId::Events.index()));

        model.close_menu();
        assert!(!model.menu_open());
        assert_eq!(model.menu_selection, None);
    }

    #[test]
    fn test_widening_terminal_closes_menu() {
        let mut model = UiModel::new(false);
        model.resize(60, 24);
        model.open_menu(None);
        assert_eq!(model.menu_selection, Some(0));

        model.resize(120, 40);
        assert!(!model.menu_open());
        assert_eq!(model.viewport, page_viewport(120, 40));
    }
}
