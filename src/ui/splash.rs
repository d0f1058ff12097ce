use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::logic::formatting::bar_cells;

/// Gradient from the top row to the bottom row
const GRADIENT_TOP: (u8, u8, u8) = (102, 126, 234);
const GRADIENT_BOTTOM: (u8, u8, u8) = (118, 75, 162);

/// Loading bar cells
pub const SPLASH_BAR_WIDTH: usize = 20;

/// Below this opacity the splash is not drawn at all
const MIN_OPACITY: f32 = 0.05;

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Background of `row` out of `height`, darkened by `opacity`
pub fn gradient_color(row: u16, height: u16, opacity: f32) -> (u8, u8, u8) {
    let t = if height <= 1 {
        0.0
    } else {
        row as f32 / (height - 1) as f32
    };
    let opacity = opacity.clamp(0.0, 1.0);
    (
        lerp(0, lerp(GRADIENT_TOP.0, GRADIENT_BOTTOM.0, t), opacity),
        lerp(0, lerp(GRADIENT_TOP.1, GRADIENT_BOTTOM.1, t), opacity),
        lerp(0, lerp(GRADIENT_TOP.2, GRADIENT_BOTTOM.2, t), opacity),
    )
}

/// Text of the loading bar at `progress` in [0, 1]
pub fn loading_bar(progress: f32) -> String {
    let (filled, empty) = bar_cells(progress, SPLASH_BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Render the full-screen loading splash
pub fn render_splash(f: &mut Frame, area: Rect, title: &str, opacity: f32, progress: f32) {
    if opacity < MIN_OPACITY || area.height == 0 {
        return;
    }

    f.render_widget(Clear, area);
    let buf = f.buffer_mut();
    for row in 0..area.height {
        let (r, g, b) = gradient_color(row, area.height, opacity);
        let row_area = Rect {
            y: area.y + row,
            height: 1,
            ..area
        };
        buf.set_style(row_area, Style::default().bg(Color::Rgb(r, g, b)));
    }

    let shade = lerp(0, 255, opacity.clamp(0.0, 1.0));
    let text_style = Style::default().fg(Color::Rgb(shade, shade, shade));
    let lines = vec![
        Line::from(Span::styled(title, text_style.add_modifier(Modifier::BOLD))),
        Line::raw(""),
        Line::from(Span::styled(loading_bar(progress), text_style)),
        Line::from(Span::styled("Loading...", text_style)),
    ];

    let text_height = lines.len() as u16;
    let text_area = Rect {
        y: area.y + area.height.saturating_sub(text_height) / 2,
        height: text_height.min(area.height),
        ..area
    };
    // No widget-level style: the gradient background stays visible
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
}
