use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::logic::layout::{LEGEND_HEIGHT, NAVBAR_HEIGHT, PAGE_PADDING, STATUS_HEIGHT};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top navigation bar area
    pub navbar_area: Rect,
    /// Scrolling page text (inside the side padding)
    pub page_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
///
/// The page area always has the size `logic::layout::page_viewport`
/// reports for the same terminal, so what is drawn is what the viewport
/// observers see.
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    // Navbar (top) + page + legend + status bar (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT), // 3 lines: top border, text, bottom border
            Constraint::Min(0),
            Constraint::Length(LEGEND_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(terminal_size);

    let content_area = main_chunks[1];
    let page_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(PAGE_PADDING),
            Constraint::Min(0),
            Constraint::Length(PAGE_PADDING),
        ])
        .split(content_area)[1];

    LayoutInfo {
        navbar_area: main_chunks[0],
        page_area,
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::layout::page_viewport;

    #[test]
    fn test_page_area_matches_viewport() {
        for (width, height) in [(80, 24), (120, 40), (60, 15)] {
            let info = calculate_layout(Rect::new(0, 0, width, height));
            let viewport = page_viewport(width, height);
            assert_eq!(info.page_area.width as usize, viewport.width);
            assert_eq!(info.page_area.height as usize, viewport.height);
        }
    }

    #[test]
    fn test_chrome_positions() {
        let info = calculate_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(info.navbar_area, Rect::new(0, 0, 100, 3));
        assert_eq!(info.legend_area.y, 28);
        assert_eq!(info.status_area.y, 29);
        assert_eq!(info.page_area.x, PAGE_PADDING);
    }
}
