use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::logic::document::SectionId;
use crate::model::page::ClockText;

/// Everything the navbar shows
pub struct NavbarState<'a> {
    pub name: &'a str,
    pub active: Option<SectionId>,
    /// Past the top of the page: highlighted border
    pub scrolled: bool,
    /// Links collapsed behind the menu toggle
    pub narrow: bool,
    pub menu_open: bool,
    pub clock: &'a ClockText,
}

/// Left-hand spans: society name, then links or the menu toggle
fn build_link_spans<'a>(state: &NavbarState<'a>) -> Vec<Span<'a>> {
    let mut spans = vec![
        Span::styled(
            state.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    if state.narrow {
        let toggle_style = if state.menu_open {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Yellow)
        };
        spans.push(Span::styled("≡ Menu (m)", toggle_style));
        return spans;
    }

    for (idx, id) in SectionId::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let label = format!("{}:{}", idx + 1, id.title());
        let style = if state.active == Some(*id) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
    }
    spans
}

/// Right-hand clock, shortened to fit beside `links_width` columns of links
///
/// The date goes first, then the time; links always keep their room.
fn build_clock_line<'a>(clock: &'a ClockText, links_width: usize, available: usize) -> Line<'a> {
    // One column between links and clock
    let room = available.saturating_sub(links_width + 1);
    let time_width = clock.time.width();
    let full_width = time_width + 1 + clock.date.width();

    let time = Span::styled(clock.time.as_str(), Style::default().fg(Color::Yellow));
    if full_width <= room {
        Line::from(vec![
            time,
            Span::raw(" "),
            Span::styled(clock.date.as_str(), Style::default().fg(Color::Gray)),
        ])
    } else if time_width <= room {
        Line::from(time)
    } else {
        Line::default()
    }
}

/// Render the navigation bar at the top of the screen
pub fn render_navbar(f: &mut Frame, area: Rect, state: &NavbarState) {
    let border_style = if state.scrolled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let links = Line::from(build_link_spans(state));
    let clock = build_clock_line(state.clock, links.width(), inner.width as usize);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(clock.width() as u16)])
        .split(inner);

    f.render_widget(Paragraph::new(links), chunks[0]);
    f.render_widget(Paragraph::new(clock).alignment(Alignment::Right), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn state<'a>(clock: &'a ClockText, narrow: bool) -> NavbarState<'a> {
        NavbarState {
            name: "ITSA SJCEM",
            active: Some(SectionId::Events),
            scrolled: false,
            narrow,
            menu_open: false,
            clock,
        }
    }

    #[test]
    fn test_wide_navbar_lists_sections() {
        let clock = ClockText::default();
        let spans = build_link_spans(&state(&clock, false));
        let text = text(&spans);
        assert!(text.starts_with("ITSA SJCEM"));
        assert!(text.contains("1:Home"));
        assert!(text.contains("6:Contact"));

        let active = spans
            .iter()
            .find(|span| span.content == "4:Events")
            .map(|span| span.style.bg);
        assert_eq!(active, Some(Some(Color::Cyan)));
    }

    fn clock() -> ClockText {
        ClockText {
            time: "21:16:02".to_string(),
            date: "Sun, 18 Oct 2026".to_string(),
        }
    }

    fn line_text(line: &Line) -> String {
        text(&line.spans)
    }

    #[test]
    fn test_clock_drops_date_before_links() {
        let clock = clock();
        assert_eq!(line_text(&build_clock_line(&clock, 40, 78)), "21:16:02 Sun, 18 Oct 2026");
        assert_eq!(line_text(&build_clock_line(&clock, 62, 78)), "21:16:02");
        assert_eq!(line_text(&build_clock_line(&clock, 75, 78)), "");
    }

    #[test]
    fn test_all_links_visible_at_80_columns() {
        use ratatui::{backend::TestBackend, Terminal};

        let clock = clock();
        let state = NavbarState {
            active: Some(SectionId::Contact),
            ..state(&clock, false)
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|f| render_navbar(f, f.area(), &state))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..80).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(row.contains("5:Team 6:Contact"), "{row}");
        assert!(row.contains("21:16:02"), "{row}");
    }

    #[test]
    fn test_narrow_navbar_collapses_links() {
        let clock = ClockText::default();
        let text = text(&build_link_spans(&state(&clock, true)));
        assert!(text.contains("≡ Menu (m)"));
        assert!(!text.contains("Home"));
    }
}
