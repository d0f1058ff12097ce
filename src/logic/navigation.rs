//! Navigation logic
//!
//! Pure functions for the navbar highlight, scroll targets and menu
//! selection with wrapping behavior.

use std::time::Duration;

use super::document::{SectionId, SectionSpan};

/// Rows above a section's top at which it already counts as current
pub const NAV_HIGHLIGHT_OFFSET: usize = 3;

/// Rows left above a section when jumping to it (fixed navbar)
pub const SCROLL_TARGET_OFFSET: usize = 2;

/// Length of a smooth scroll to a section
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);

/// Find the section the reader is in
///
/// A section is current while the scroll position lies in
/// `[top - NAV_HIGHLIGHT_OFFSET, top - NAV_HIGHLIGHT_OFFSET + height)`.
/// When ranges overlap the later section wins.
///
/// # Examples
/// ```
/// use itsatui::logic::document::{SectionId, SectionSpan};
/// use itsatui::logic::navigation::active_section;
///
/// let sections = [
///     SectionSpan { id: SectionId::Home, top: 0, height: 10 },
///     SectionSpan { id: SectionId::About, top: 10, height: 20 },
/// ];
/// assert_eq!(active_section(&sections, 0), Some(SectionId::Home));
/// assert_eq!(active_section(&sections, 7), Some(SectionId::About));
/// assert_eq!(active_section(&sections, 40), None);
/// ```
pub fn active_section(sections: &[SectionSpan], scroll: usize) -> Option<SectionId> {
    sections
        .iter()
        .filter(|span| {
            let start = span.top.saturating_sub(NAV_HIGHLIGHT_OFFSET);
            scroll >= start && scroll < start + span.height
        })
        .map(|span| span.id)
        .last()
}

/// Whether the navbar shows its scrolled style
pub fn navbar_scrolled(scroll: usize) -> bool {
    scroll > NAV_HIGHLIGHT_OFFSET
}

/// Scroll position that brings a section just below the navbar
pub fn scroll_target(section_top: usize) -> usize {
    section_top.saturating_sub(SCROLL_TARGET_OFFSET)
}

/// Largest scroll position that still fills the viewport
pub fn max_scroll(document_height: usize, viewport_height: usize) -> usize {
    document_height.saturating_sub(viewport_height)
}

/// Apply a signed scroll delta and clamp to the document
///
/// # Examples
/// ```
/// use itsatui::logic::navigation::scroll_by;
///
/// assert_eq!(scroll_by(5, -10, 100, 20), 0);
/// assert_eq!(scroll_by(5, 3, 100, 20), 8);
/// assert_eq!(scroll_by(75, 10, 100, 20), 80);
/// ```
pub fn scroll_by(
    position: usize,
    delta: isize,
    document_height: usize,
    viewport_height: usize,
) -> usize {
    let max = max_scroll(document_height, viewport_height);
    position.saturating_add_signed(delta).min(max)
}

/// Calculate the next selection index with wrapping
///
/// Advances the selection to the next item in the list. If at the end,
/// wraps around to the beginning. If no item is selected, selects the first item.
///
/// # Examples
/// ```
/// use itsatui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// Moves the selection to the previous item in the list. If at the beginning,
/// wraps around to the end. If no item is selected, selects the last item.
///
/// # Examples
/// ```
/// use itsatui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => i - 1,
    })
}
