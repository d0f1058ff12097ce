//! Pure Application Model - Elm Architecture
//!
//! This module defines the plain state for the application, split into
//! focused sub-models:
//!
//! - **PageModel**: Scroll position and page animations
//! - **ContactForm**: Contact form fields and submission flag
//! - **UiModel**: Preferences, menu, input focus, terminal size
//!
//! Overlays live in the overlay manager, not here: the model never holds
//! timers or surfaces.

pub mod form;
pub mod page;
pub mod types;
pub mod ui;

pub use form::ContactForm;
pub use page::PageModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Scroll position and page animations
    pub page: PageModel,

    /// Contact form
    pub form: ContactForm,

    /// UI preferences and visual state
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            page: PageModel::new(),
            form: ContactForm::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    pub fn input_mode(&self) -> InputMode {
        self.ui.input_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(false);
        assert_eq!(model.page.scroll.target(), 0);
        assert_eq!(model.page.typing.typed, 0);
        assert!(model.page.typing.cursor_visible);
        assert!(!model.form.submitting);
        assert!(!model.ui.vim_mode);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(false);
        let _cloned = model.clone();
    }

    #[test]
    fn test_vim_command_state() {
        let model = Model::new(true);
        assert_eq!(model.ui.vim_command_state, VimCommandState::None);
        assert_eq!(model.input_mode(), InputMode::Page);
    }
}
