//! Layout calculation logic
//!
//! Pure functions for calculating UI layout dimensions. The renderer and
//! the viewport observers both size the page from these, so they always
//! agree on which rows are on screen.

/// Navbar height (top border, text, bottom border)
pub const NAVBAR_HEIGHT: u16 = 3;

/// Hotkey legend height
pub const LEGEND_HEIGHT: u16 = 1;

/// Status bar height
pub const STATUS_HEIGHT: u16 = 1;

/// Blank columns on each side of the page text
pub const PAGE_PADDING: u16 = 2;

/// Below this width the nav links collapse into the menu toggle
pub const NARROW_WIDTH: u16 = 80;

/// Page text area in rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        page_viewport(80, 24)
    }
}

/// Size of the page text area for a terminal of the given size
///
/// # Examples
/// ```
/// use itsatui::logic::layout::page_viewport;
///
/// let viewport = page_viewport(100, 30);
/// assert_eq!(viewport.width, 96);
/// assert_eq!(viewport.height, 25);
///
/// // Tiny terminals never produce a negative size
/// let tiny = page_viewport(2, 3);
/// assert_eq!((tiny.width, tiny.height), (0, 0));
/// ```
pub fn page_viewport(terminal_width: u16, terminal_height: u16) -> Viewport {
    let chrome = NAVBAR_HEIGHT + LEGEND_HEIGHT + STATUS_HEIGHT;
    Viewport {
        width: terminal_width.saturating_sub(PAGE_PADDING * 2) as usize,
        height: terminal_height.saturating_sub(chrome) as usize,
    }
}

/// Whether the terminal is narrow enough for the collapsed menu
pub fn is_narrow(terminal_width: u16) -> bool {
    terminal_width < NARROW_WIDTH
}
