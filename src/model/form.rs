//! Contact form model
//!
//! Field values, focus and the disabled-while-sending flag. Input is never
//! validated; the form exists to exercise the submission toast.

use crate::logic::document::FormField;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: FormField,
    /// Set while the mock submission is in flight; the form is disabled
    pub submitting: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: FormField::Name,
            submitting: false,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
            FormField::Submit => "",
        }
    }

    fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            FormField::Submit => None,
        }
    }

    /// Type into the focused field. Ignored while sending or on the button.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.submitting {
            return false;
        }
        match self.focused_value_mut() {
            Some(value) => {
                value.push(ch);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.focused_value_mut()
            .and_then(|value| value.pop())
            .is_some()
    }

    pub fn focus_next(&mut self) {
        if !self.submitting {
            self.focus = self.focus.next();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.submitting {
            self.focus = self.focus.prev();
        }
    }

    /// Clear all fields and re-enable the form
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::new();
        form.insert_char('A');
        form.focus_next();
        form.insert_char('b');
        assert_eq!(form.name, "A");
        assert_eq!(form.email, "b");
        assert_eq!(form.value(FormField::Email), "b");
    }

    #[test]
    fn test_submit_button_takes_no_text() {
        let mut form = ContactForm::new();
        form.focus = FormField::Submit;
        assert!(!form.insert_char('x'));
        assert!(!form.backspace());
    }

    #[test]
    fn test_disabled_while_submitting() {
        let mut form = ContactForm::new();
        form.insert_char('A');
        form.submitting = true;

        assert!(!form.insert_char('B'));
        assert!(!form.backspace());
        form.focus_next();
        assert_eq!(form.focus, FormField::Name);
        assert_eq!(form.name, "A");
        assert_eq!(form.button_label(), SENDING_LABEL);
    }

    #[test]
    fn test_reset() {
        let mut form = ContactForm::new();
        form.insert_char('A');
        form.focus = FormField::Message;
        form.submitting = true;

        form.reset();
        assert_eq!(form, ContactForm::new());
        assert_eq!(form.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let mut form = ContactForm::new();
        assert!(!form.backspace());
    }
}
