//! Rendering surface for overlays
//!
//! The manager only talks to a `Surface`; `Display` is the concrete one the
//! terminal renderer reads each frame. Overlays are kept in attach order,
//! which is also their stacking order (later on top).

use tracing::warn;

use super::types::{OverlayContent, OverlayId, OverlayStyle, OverlayView};

/// Display tree operations the overlay manager needs
pub trait Surface {
    /// Insert an overlay on top of everything attached so far
    fn attach(&mut self, view: OverlayView);

    /// Remove an overlay. Returns false if it was not attached.
    fn detach(&mut self, id: OverlayId) -> bool;

    /// Replace the style of an attached overlay. Returns false if absent.
    fn set_style(&mut self, id: OverlayId, style: OverlayStyle) -> bool;

    fn is_attached(&self, id: OverlayId) -> bool;
}

/// Overlays currently on screen
#[derive(Debug, Clone, Default)]
pub struct Display {
    overlays: Vec<OverlayView>,
}

impl Display {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached overlays, bottom to top
    pub fn overlays(&self) -> impl Iterator<Item = &OverlayView> {
        self.overlays.iter()
    }

    pub fn toasts(&self) -> impl Iterator<Item = &OverlayView> {
        self.overlays.iter().filter(|view| view.content.is_toast())
    }

    pub fn find(&self, id: OverlayId) -> Option<&OverlayView> {
        self.overlays.iter().find(|view| view.id == id)
    }

    /// Whether any attached toast shows `text`
    pub fn contains_message(&self, text: &str) -> bool {
        self.overlays.iter().any(|view| match &view.content {
            OverlayContent::Toast { message, .. } => message.contains(text),
            OverlayContent::Splash { .. } => false,
        })
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

impl Surface for Display {
    fn attach(&mut self, view: OverlayView) {
        if self.is_attached(view.id) {
            warn!(id = view.id.raw(), "overlay attached twice; replacing");
            self.detach(view.id);
        }
        self.overlays.push(view);
    }

    fn detach(&mut self, id: OverlayId) -> bool {
        match self.overlays.iter().position(|view| view.id == id) {
            Some(pos) => {
                self.overlays.remove(pos);
                true
            }
            None => false,
        }
    }

    fn set_style(&mut self, id: OverlayId, style: OverlayStyle) -> bool {
        match self.overlays.iter_mut().find(|view| view.id == id) {
            Some(view) => {
                view.style = style;
                true
            }
            None => false,
        }
    }

    fn is_attached(&self, id: OverlayId) -> bool {
        self.overlays.iter().any(|view| view.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::types::Severity;

    fn toast(id: u64, message: &str) -> OverlayView {
        OverlayView {
            id: OverlayId::new(id),
            content: OverlayContent::Toast {
                message: message.to_string(),
                severity: Severity::Info,
            },
            style: OverlayStyle::toast_offscreen(),
        }
    }

    #[test]
    fn test_attach_and_detach() {
        let mut display = Display::new();
        display.attach(toast(1, "one"));
        assert_eq!(display.len(), 1);
        assert!(display.is_attached(OverlayId::new(1)));
        assert!(display.contains_message("one"));

        assert!(display.detach(OverlayId::new(1)));
        assert!(display.is_empty());
        assert!(!display.detach(OverlayId::new(1)));
    }

    #[test]
    fn test_attach_order_is_stacking_order() {
        let mut display = Display::new();
        display.attach(OverlayView {
            id: OverlayId::new(1),
            content: OverlayContent::Splash {
                title: "ITSA".to_string(),
            },
            style: OverlayStyle::splash(),
        });
        display.attach(toast(2, "top"));

        let ids: Vec<u64> = display.overlays().map(|view| view.id.raw()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(display.toasts().count(), 1);
    }

    #[test]
    fn test_set_style_on_missing_overlay() {
        let mut display = Display::new();
        assert!(!display.set_style(OverlayId::new(9), OverlayStyle::splash()));
    }

    #[test]
    fn test_double_attach_replaces() {
        let mut display = Display::new();
        display.attach(toast(1, "first"));
        display.attach(toast(1, "second"));
        assert_eq!(display.len(), 1);
        assert!(display.contains_message("second"));
    }
}
