//! Overlay data types

use serde::Deserialize;
use std::time::Duration;

use crate::logic::transition::Transition;

/// Identifier of one overlay instance. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

impl OverlayId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Visual treatment of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
}

/// Overlay lifecycle. Ordered: an overlay only ever moves to a later state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OverlayState {
    Entering,
    Visible,
    Leaving,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayContent {
    Toast { message: String, severity: Severity },
    Splash { title: String },
}

impl OverlayContent {
    pub fn is_toast(&self) -> bool {
        matches!(self, OverlayContent::Toast { .. })
    }

    pub fn is_splash(&self) -> bool {
        matches!(self, OverlayContent::Splash { .. })
    }
}

/// An overlay as owned by the manager
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    id: OverlayId,
    content: OverlayContent,
    state: OverlayState,
}

impl Overlay {
    pub(crate) fn new(id: OverlayId, content: OverlayContent) -> Self {
        Self {
            id,
            content,
            state: OverlayState::Entering,
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn content(&self) -> &OverlayContent {
        &self.content
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Toast text, if this is a toast
    pub fn message(&self) -> Option<&str> {
        match &self.content {
            OverlayContent::Toast { message, .. } => Some(message),
            OverlayContent::Splash { .. } => None,
        }
    }

    /// Move to `next` if it is later than the current state
    pub(crate) fn advance(&mut self, next: OverlayState) -> bool {
        if next > self.state {
            self.state = next;
            true
        } else {
            false
        }
    }
}

/// Animated style properties the renderer reads
///
/// - `slide`: 0.0 on-screen, 1.0 fully off-screen (toast)
/// - `opacity`: 1.0 opaque, 0.0 invisible (splash)
/// - `progress`: loading bar fill in [0, 1] (splash)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub slide: Transition,
    pub opacity: Transition,
    pub progress: Transition,
}

impl OverlayStyle {
    /// Toast parked off-screen, ready to slide in
    pub fn toast_offscreen() -> Self {
        Self {
            slide: Transition::fixed(1.0),
            opacity: Transition::fixed(1.0),
            progress: Transition::fixed(0.0),
        }
    }

    /// Opaque splash with an empty loading bar
    pub fn splash() -> Self {
        Self {
            slide: Transition::fixed(0.0),
            opacity: Transition::fixed(1.0),
            progress: Transition::fixed(0.0),
        }
    }
}

/// What the surface holds for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub id: OverlayId,
    pub content: OverlayContent,
    pub style: OverlayStyle,
}

/// Overlay delays in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OverlayTimings {
    /// Attach-settle delay before a toast slides in
    pub toast_settle_ms: u64,
    /// Slide animation length (in and out)
    pub toast_slide_ms: u64,
    /// Auto-dismiss deadline, measured from creation
    pub toast_display_ms: u64,
    /// Wait after leaving starts before the toast is detached
    pub toast_teardown_ms: u64,
    /// Delay before the splash loading bar starts filling
    pub splash_fill_delay_ms: u64,
    /// Loading bar fill length
    pub splash_fill_ms: u64,
    /// Time from creation until the splash starts fading
    pub splash_display_ms: u64,
    /// Fade length; the splash is detached when it ends
    pub splash_fade_ms: u64,
}

impl Default for OverlayTimings {
    fn default() -> Self {
        Self {
            toast_settle_ms: 100,
            toast_slide_ms: 300,
            toast_display_ms: 5000,
            toast_teardown_ms: 300,
            splash_fill_delay_ms: 100,
            splash_fill_ms: 2000,
            splash_display_ms: 2000,
            splash_fade_ms: 500,
        }
    }
}

impl OverlayTimings {
    pub fn toast_settle(&self) -> Duration {
        Duration::from_millis(self.toast_settle_ms)
    }

    pub fn toast_slide(&self) -> Duration {
        Duration::from_millis(self.toast_slide_ms)
    }

    pub fn toast_display(&self) -> Duration {
        Duration::from_millis(self.toast_display_ms)
    }

    pub fn toast_teardown(&self) -> Duration {
        Duration::from_millis(self.toast_teardown_ms)
    }

    pub fn splash_fill_delay(&self) -> Duration {
        Duration::from_millis(self.splash_fill_delay_ms)
    }

    pub fn splash_fill(&self) -> Duration {
        Duration::from_millis(self.splash_fill_ms)
    }

    pub fn splash_display(&self) -> Duration {
        Duration::from_millis(self.splash_display_ms)
    }

    pub fn splash_fade(&self) -> Duration {
        Duration::from_millis(self.splash_fade_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_only_moves_forward() {
        let mut overlay = Overlay::new(
            OverlayId::new(1),
            OverlayContent::Splash {
                title: "ITSA".to_string(),
            },
        );
        assert_eq!(overlay.state(), OverlayState::Entering);

        assert!(overlay.advance(OverlayState::Visible));
        assert!(!overlay.advance(OverlayState::Entering));
        assert!(!overlay.advance(OverlayState::Visible));
        assert!(overlay.advance(OverlayState::Removed));
        assert!(!overlay.advance(OverlayState::Leaving));
        assert_eq!(overlay.state(), OverlayState::Removed);
    }

    #[test]
    fn test_message_only_for_toasts() {
        let toast = Overlay::new(
            OverlayId::new(1),
            OverlayContent::Toast {
                message: "Hi".to_string(),
                severity: Severity::Info,
            },
        );
        assert_eq!(toast.message(), Some("Hi"));
        assert!(toast.content().is_toast());

        let splash = Overlay::new(
            OverlayId::new(2),
            OverlayContent::Splash {
                title: "ITSA".to_string(),
            },
        );
        assert_eq!(splash.message(), None);
        assert!(splash.content().is_splash());
    }

    #[test]
    fn test_timings_partial_yaml_keeps_defaults() {
        let timings: OverlayTimings = serde_yaml::from_str("toast_display_ms: 1500").unwrap();
        assert_eq!(timings.toast_display(), Duration::from_millis(1500));
        assert_eq!(timings.toast_settle(), Duration::from_millis(100));
        assert_eq!(timings.splash_fade(), Duration::from_millis(500));
    }

    #[test]
    fn test_severity_parses_lowercase() {
        let severity: Severity = serde_yaml::from_str("success").unwrap();
        assert_eq!(severity, Severity::Success);
    }
}
