use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::logic::formatting::wrap_text;
use crate::overlay::Severity;

/// Widest a toast grows before wrapping
pub const TOAST_MAX_WIDTH: u16 = 40;

/// Rows between the top of the screen and the toast
const TOAST_TOP: u16 = 4;

/// Columns between the toast and the right edge when fully shown
const TOAST_MARGIN: u16 = 1;

fn icon(severity: Severity) -> (&'static str, Color) {
    match severity {
        Severity::Success => ("✓ ", Color::Green),
        Severity::Info => ("ℹ ", Color::Blue),
    }
}

/// Message lines wrapped for a toast of `width` columns
fn toast_lines(message: &str, width: u16) -> Vec<String> {
    // Borders, padding and the icon take 6 columns
    wrap_text(message, width.saturating_sub(6) as usize)
}

/// Full-size box of a toast before sliding is applied
fn full_rect(area: Rect, message: &str) -> Rect {
    let width = ((message.width() + 6) as u16)
        .min(TOAST_MAX_WIDTH)
        .min(area.width.saturating_sub(TOAST_MARGIN));
    let height = toast_lines(message, width).len() as u16 + 2;
    Rect {
        x: area.right().saturating_sub(width + TOAST_MARGIN),
        y: area.y + TOAST_TOP.min(area.height.saturating_sub(height)),
        width,
        height: height.min(area.height),
    }
}

/// Visible part of a toast at `slide` (0.0 shown, 1.0 off-screen to the right)
///
/// Returns None when nothing of the toast is on screen.
pub fn toast_rect(area: Rect, message: &str, slide: f32) -> Option<Rect> {
    let full = full_rect(area, message);
    let travel = (full.width + TOAST_MARGIN) as f32;
    let offset = (slide.clamp(0.0, 1.0) * travel).round() as u16;
    let x = full.x.saturating_add(offset);
    if x >= area.right() || full.width == 0 {
        return None;
    }
    Some(Rect {
        x,
        width: full.width.min(area.right() - x),
        ..full
    })
}

/// Render a toast notification sliding in from the right
pub fn render_toast(f: &mut Frame, area: Rect, message: &str, severity: Severity, slide: f32) {
    let Some(toast_area) = toast_rect(area, message, slide) else {
        return;
    };
    let full = full_rect(area, message);
    let clipped = toast_area.width < full.width;

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, color) = icon(severity);
    let lines: Vec<Line> = toast_lines(message, full.width)
        .into_iter()
        .enumerate()
        .map(|(idx, text)| {
            let lead = if idx == 0 { icon } else { "  " };
            Line::from(vec![
                Span::raw(" "),
                Span::styled(lead, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(text),
            ])
        })
        .collect();

    // A toast half off-screen has no right border or close button
    let borders = if clipped {
        Borders::TOP | Borders::BOTTOM | Borders::LEFT
    } else {
        Borders::ALL
    };
    let mut block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    if !clipped {
        block = block.title(Line::from("[x]").right_aligned());
    }

    f.render_widget(Paragraph::new(lines).block(block), toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    #[test]
    fn test_shown_toast_hugs_right_edge() {
        let rect = toast_rect(SCREEN, "Saved", 0.0).unwrap();
        assert_eq!(rect.width, 11);
        assert_eq!(rect.right(), SCREEN.right() - TOAST_MARGIN);
        assert_eq!(rect.y, TOAST_TOP);
        assert_eq!(rect.height, 3);
    }

    #[test]
    fn test_long_message_wraps_at_max_width() {
        let message = "Message sent successfully! We'll get back to you soon.";
        let rect = toast_rect(SCREEN, message, 0.0).unwrap();
        assert_eq!(rect.width, TOAST_MAX_WIDTH);
        assert!(rect.height > 3);
    }

    #[test]
    fn test_slide_moves_right_and_clips() {
        let shown = toast_rect(SCREEN, "Saved", 0.0).unwrap();
        let half = toast_rect(SCREEN, "Saved", 0.5).unwrap();
        assert!(half.x > shown.x);
        assert!(half.width < shown.width);
        assert_eq!(half.right(), SCREEN.right());
    }

    #[test]
    fn test_offscreen_toast_has_no_rect() {
        assert_eq!(toast_rect(SCREEN, "Saved", 1.0), None);
    }

    #[test]
    fn test_tiny_screen() {
        let tiny = Rect::new(0, 0, 1, 1);
        assert_eq!(toast_rect(tiny, "Saved", 0.0), None);
    }
}
