//! Keyboard Input Handler
//!
//! Dispatches key presses by input mode: the contact form takes text, the
//! collapsed menu takes selection keys, and the page takes everything else.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::logic::document::{FormField, SectionId};
use crate::model::{InputMode, VimCommandState};
use crate::scheduler::Clock;

/// Handle keyboard input
pub fn handle_key<C: Clock + Clone>(app: &mut App<C>, key: KeyEvent) {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The splash covers the page; only quitting gets through
    if app.splash_active() {
        if key.code == KeyCode::Char('q') {
            app.quit();
        }
        return;
    }

    match app.model.input_mode() {
        InputMode::Form => handle_form_key(app, key),
        InputMode::Menu => handle_menu_key(app, key),
        InputMode::Page => handle_page_key(app, key),
    }
}

fn handle_form_key<C: Clock + Clone>(app: &mut App<C>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.unfocus_form(),
        KeyCode::Tab | KeyCode::Down => app.model.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.model.form.focus_prev(),
        KeyCode::Backspace => {
            app.model.form.backspace();
        }
        KeyCode::Enter => match app.model.form.focus {
            FormField::Submit => {
                app.submit_contact_form();
            }
            _ => app.model.form.focus_next(),
        },
        KeyCode::Char(ch) => {
            app.model.form.insert_char(ch);
        }
        _ => {}
    }
}

fn handle_menu_key<C: Clock + Clone>(app: &mut App<C>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.menu_next(),
        KeyCode::Char('k') | KeyCode::Up => app.menu_prev(),
        KeyCode::Enter => app.menu_select(),
        KeyCode::Char('q') => app.quit(),
        // Any other key (including Esc and the toggle itself) closes the menu
        _ => {
            app.toggle_menu();
        }
    }
}

fn handle_page_key<C: Clock + Clone>(app: &mut App<C>, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    let waiting_for_g = app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG;
    app.model.ui.vim_command_state = VimCommandState::None;

    match key.code {
        KeyCode::Char('q') => app.quit(),
        // Vim keybindings with Ctrl modifiers (check before plain letters)
        KeyCode::Char('d') if vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.half_page_down();
        }
        KeyCode::Char('u') if vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.half_page_up();
        }
        KeyCode::Char('f') if vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.page_down();
        }
        KeyCode::Char('b') if vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.page_up();
        }
        KeyCode::Char('g') if vim_mode => {
            if waiting_for_g {
                // gg - jump to top
                app.scroll_to_top();
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if vim_mode => app.scroll_to_bottom(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_lines(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_lines(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.prev_section(),
        KeyCode::Char(digit @ '1'..='6') => {
            let index = digit as usize - '1' as usize;
            if let Some(id) = SectionId::from_index(index) {
                app.jump_to_section(id);
            }
        }
        KeyCode::Char('m') => {
            app.toggle_menu();
        }
        KeyCode::Char('f') => app.focus_form(),
        KeyCode::Char('x') => {
            app.dismiss_toast();
        }
        KeyCode::Char('?') => app.show_help(),
        _ => {}
    }
}
