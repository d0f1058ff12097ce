use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::InputMode;

fn key(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, input_mode: InputMode, narrow: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match input_mode {
        InputMode::Form => {
            hotkey_spans.extend(vec![
                key("Tab"),
                Span::raw(":Next field  "),
                key("Enter"),
                Span::raw(":Send  "),
                key("Esc"),
                Span::raw(":Leave form"),
            ]);
            return hotkey_spans;
        }
        InputMode::Menu => {
            hotkey_spans.extend(vec![
                key("↑/↓"),
                Span::raw(":Select  "),
                key("Enter"),
                Span::raw(":Go  "),
                key("Esc"),
                Span::raw(":Close"),
            ]);
            return hotkey_spans;
        }
        InputMode::Page => {}
    }

    // Scrolling keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            key("jk"),
            Span::raw(":Scroll  "),
            key("gg/G"),
            Span::raw(":Top/Bottom  "),
            key("^d/^u"),
            Span::raw(":½Page  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Scroll  "),
            key("PgUp/PgDn"),
            Span::raw(":Page  "),
        ]);
    }

    hotkey_spans.extend(vec![
        key("1-6"),
        Span::raw(":Section  "),
        key("Tab"),
        Span::raw(":Next  "),
    ]);

    // Menu toggle only exists when the links are collapsed
    if narrow {
        hotkey_spans.extend(vec![key("m"), Span::raw(":Menu  ")]);
    }

    hotkey_spans.extend(vec![
        key("f"),
        Span::raw(":Contact  "),
        key("x"),
        Span::raw(":Close toast  "),
        key("?"),
        Span::raw(":Help  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend (changes with vim mode, input mode and width)
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    input_mode: InputMode,
    narrow: bool,
) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, input_mode, narrow)))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_legend_vim_mode() {
        let text = spans_to_text(&build_hotkey_spans(true, InputMode::Page, false));
        assert!(text.contains("gg/G"), "got: {}", text);

        let text = spans_to_text(&build_hotkey_spans(false, InputMode::Page, false));
        assert!(!text.contains("gg/G"), "got: {}", text);
        assert!(text.contains("PgUp/PgDn"));
    }

    #[test]
    fn test_legend_menu_key_only_when_narrow() {
        let wide = spans_to_text(&build_hotkey_spans(false, InputMode::Page, false));
        let narrow = spans_to_text(&build_hotkey_spans(false, InputMode::Page, true));
        assert!(!wide.contains("m:Menu"));
        assert!(narrow.contains("m:Menu"));
    }

    #[test]
    fn test_legend_form_mode() {
        let text = spans_to_text(&build_hotkey_spans(false, InputMode::Form, false));
        assert!(text.contains("Esc:Leave form"));
        assert!(!text.contains("q:Quit"), "typing q in the form must not look like quit");
    }
}
