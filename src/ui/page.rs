use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::content::SiteContent;
use crate::logic::document::{DocLine, DocRow, FormField, Tone};
use crate::logic::formatting::{bar_cells, fit_width};
use crate::logic::reveal::{is_faded, reveal_shift};
use crate::logic::typing::typed_prefix;
use crate::model::{InputMode, Model};
use crate::scheduler::Clock;

/// Widest a domain progress bar gets
const MAX_BAR_WIDTH: usize = 30;

/// Column where form inputs start ("Message: ")
const FIELD_LABEL_WIDTH: usize = 9;

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Normal => Style::default(),
        Tone::Muted => Style::default().fg(Color::Gray),
        Tone::Accent => Style::default().fg(Color::Yellow),
        Tone::Strong => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn progress_line(
    content: &SiteContent,
    model: &Model,
    index: usize,
    width: usize,
    now: Duration,
) -> Line<'static> {
    let Some(domain) = content.domains.get(index) else {
        return Line::raw("");
    };
    let name_width = content
        .domains
        .iter()
        .map(|domain| domain.name.width())
        .max()
        .unwrap_or(0);
    // name, " ", bar, " 100%"
    let bar_width = width.saturating_sub(name_width + 6).min(MAX_BAR_WIDTH);

    let fraction = model.page.bar_fraction(index, now);
    let (filled, empty) = bar_cells(fraction, bar_width);
    let percent = (fraction * 100.0).round() as u32;

    Line::from(vec![
        Span::raw(fit_width(&domain.name, name_width)),
        Span::raw(" "),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {:>3}%", percent), Style::default().fg(Color::Gray)),
    ])
}

fn stats_line(content: &SiteContent, model: &Model, now: Duration) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, stat) in content.stats.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("{}+", model.page.counter(stat.count, now)),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", stat.label), Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}

fn field_line(model: &Model, field: FormField, width: usize) -> Line<'static> {
    let form = &model.form;
    let focused = model.ui.input_mode == InputMode::Form && form.focus == field;
    let disabled = form.submitting;

    if field == FormField::Submit {
        let style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        return Line::from(vec![
            Span::raw(" ".repeat(FIELD_LABEL_WIDTH)),
            Span::styled(format!("[ {} ]", form.button_label()), style),
        ]);
    }

    let input_width = width.saturating_sub(FIELD_LABEL_WIDTH + 2).max(1);
    let mut value = form.value(field).to_string();
    if focused && !disabled {
        value.push('_');
    }
    // Keep the end of long input in view
    let visible: String = {
        let chars: Vec<char> = value.chars().collect();
        let skip = chars.len().saturating_sub(input_width);
        chars[skip..].iter().collect()
    };

    let input_style = if disabled {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    } else if focused {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray).bg(Color::Black)
    };
    let label_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(
            fit_width(&format!("{}:", field.label()), FIELD_LABEL_WIDTH),
            label_style,
        ),
        Span::styled(fit_width(&visible, input_width), input_style),
    ])
}

/// Styled line for one document row (before reveal effects)
pub fn row_line<C: Clock + Clone>(
    app: &App<C>,
    row: &DocRow,
    width: usize,
    now: Duration,
) -> Line<'static> {
    let model = &app.model;
    match &row.line {
        DocLine::Blank => Line::raw(""),
        DocLine::Heading(text) => Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        DocLine::Text { text, tone } => Line::from(Span::styled(text.clone(), tone_style(*tone))),
        DocLine::TypedTitle => {
            let typing = &model.page.typing;
            let mut spans = vec![Span::styled(
                typed_prefix(&app.content.name, typing.typed).to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )];
            if typing.cursor_visible {
                spans.push(Span::styled("|", Style::default().fg(Color::Yellow)));
            }
            Line::from(spans)
        }
        DocLine::Stats => stats_line(&app.content, model, now),
        DocLine::Progress(index) => progress_line(&app.content, model, *index, width, now),
        DocLine::Field(field) => field_line(model, *field, width),
    }
}

/// Render the visible slice of the page
pub fn render_page<C: Clock + Clone>(f: &mut Frame, area: Rect, app: &App<C>) {
    let now = app.now();
    let scroll = app.scroll_position();
    let width = area.width as usize;

    for (offset, row) in app
        .document
        .rows
        .iter()
        .skip(scroll)
        .take(area.height as usize)
        .enumerate()
    {
        let mut row_area = Rect {
            y: area.y + offset as u16,
            height: 1,
            ..area
        };

        let mut line = row_line(app, row, width, now);
        let mut clip = 0u16;

        if let Some(block) = row.block {
            let Some(progress) = app.model.page.reveal_progress(block, now) else {
                // Not revealed yet
                continue;
            };
            let effect = app.document.blocks[block].effect;
            let shift = reveal_shift(effect, progress);
            if shift < 0 {
                clip = shift.unsigned_abs();
            } else {
                let indent = (shift as u16).min(row_area.width);
                row_area.x += indent;
                row_area.width -= indent;
            }
            if is_faded(progress) {
                line = line.patch_style(Style::default().fg(Color::DarkGray));
            }
        }

        f.render_widget(Paragraph::new(line).scroll((0, clip)), row_area);
    }
}
