use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::logic::document::SectionId;

/// Dropdown under the navbar listing every section
pub fn render_menu(f: &mut Frame, area: Rect, selection: Option<usize>) {
    let menu_items: Vec<ListItem> = SectionId::ALL
        .iter()
        .map(|id| ListItem::new(Span::raw(id.title())).style(Style::default().fg(Color::White)))
        .collect();

    let menu_height = (SectionId::ALL.len() as u16 + 2).min(area.height.saturating_sub(3));
    let menu_area = Rect {
        x: area.x,
        y: area.y + 3,
        width: 20.min(area.width),
        height: menu_height,
    };

    let menu = List::new(menu_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Menu")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(selection);

    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(menu, menu_area, &mut state);
}
