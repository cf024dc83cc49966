//! Key handling for the full-screen interface.
//!
//! Global: F1-F4 follow the navigation bar, Ctrl+C quits, Esc goes home
//! (or quits from home). Landing: arrows/Tab pick a service, Enter opens it.
//! Chats: typing edits the field, Up/Down/Tab move the quick-reply
//! highlight, Enter sends (or presses the highlighted quick reply when the
//! field is empty).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mindcare_types::screen::{Screen, NAV_ITEMS};

use super::state::TuiState;

pub fn handle_key(key: KeyEvent, state: &mut TuiState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    if let KeyCode::F(n @ 1..=4) = key.code {
        state.navigate(NAV_ITEMS[usize::from(n) - 1].screen);
        return;
    }

    if key.code == KeyCode::Esc {
        match state.screen() {
            Screen::Landing => state.quit = true,
            _ => state.navigate(Screen::Landing),
        }
        return;
    }

    match state.screen() {
        Screen::Landing => handle_landing_key(key.code, state),
        Screen::Chatbot | Screen::ExpertChat => handle_chat_key(key.code, state),
    }
}

fn handle_landing_key(code: KeyCode, state: &mut TuiState) {
    match code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l') | KeyCode::Char('j') => {
            state.next_landing_choice();
        }
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Char('k') => {
            state.previous_landing_choice();
        }
        KeyCode::Enter => state.activate_landing_choice(),
        _ => {}
    }
}

fn handle_chat_key(code: KeyCode, state: &mut TuiState) {
    match code {
        KeyCode::Enter => state.submit(),
        KeyCode::Backspace => {
            state.input.pop();
        }
        KeyCode::Down | KeyCode::Tab => state.next_quick_reply(),
        KeyCode::Up | KeyCode::BackTab => state.previous_quick_reply(),
        KeyCode::Char(c) => state.input.push(c),
        _ => {}
    }
}
