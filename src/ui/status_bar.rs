use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::logic::document::SectionId;

/// Build the status text: "Section: About | Scroll: 42% | Form: Sending..."
pub fn build_status_line(
    section: Option<SectionId>,
    scroll: usize,
    max_scroll: usize,
    form_status: Option<&str>,
) -> String {
    let mut metrics = Vec::new();

    metrics.push(format!(
        "Section: {}",
        section.map(SectionId::title).unwrap_or("-")
    ));

    let percent = if max_scroll == 0 {
        100
    } else {
        (scroll.min(max_scroll) * 100) / max_scroll
    };
    metrics.push(format!("Scroll: {}%", percent));

    if let Some(status) = form_status {
        metrics.push(format!("Form: {}", status));
    }

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, status_line: &str) {
    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value));
        } else {
            spans.push(Span::raw(part));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Gray));
    f.render_widget(status_bar, area);
}
