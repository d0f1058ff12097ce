//! Contact form orchestration
//!
//! Focus handling and the mock submission: the form is disabled for two
//! seconds, then a success toast is shown and the fields are cleared.

use std::time::Duration;

use tracing::debug;

use super::{App, PageTimer};
use crate::logic::document::SectionId;
use crate::model::InputMode;
use crate::scheduler::{Clock, Scheduler};

/// Simulated network round trip of a submission
pub const FORM_SEND_DELAY: Duration = Duration::from_millis(2000);

pub const SENT_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";

impl<C: Clock + Clone> App<C> {
    /// Move keyboard focus into the contact form, scrolling it into view
    pub fn focus_form(&mut self) {
        self.model.ui.close_menu();
        self.model.ui.input_mode = InputMode::Form;
        self.jump_to_section(SectionId::Contact);
    }

    pub fn unfocus_form(&mut self) {
        self.model.ui.input_mode = InputMode::Page;
    }

    /// Start the mock submission. Returns false while one is in flight.
    pub fn submit_contact_form(&mut self) -> bool {
        if self.model.form.submitting {
            return false;
        }
        self.model.form.submitting = true;
        self.timers.schedule(FORM_SEND_DELAY, PageTimer::FormSent);
        debug!("contact form sending");
        true
    }
}
