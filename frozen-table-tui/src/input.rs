//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Focus;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusSearch,
    FocusTable,
    Insert(char),
    Backspace,
    ClearSearch,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    /// Header cursor one column left.
    Left,
    /// Header cursor one column right.
    Right,
    /// Sort by the column under the header cursor.
    Activate,
}

/// Maps a key press to an action for the focused area.
pub fn map_key(focus: Focus, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match (focus, key.code) {
        (_, KeyCode::Up) => Some(Action::Up),
        (_, KeyCode::Down) => Some(Action::Down),
        (_, KeyCode::PageUp) => Some(Action::PageUp),
        (_, KeyCode::PageDown) => Some(Action::PageDown),

        (Focus::Search, KeyCode::Esc | KeyCode::Enter | KeyCode::Tab) => Some(Action::FocusTable),
        (Focus::Search, KeyCode::Backspace) => Some(Action::Backspace),
        (Focus::Search, KeyCode::Char('u')) if ctrl => Some(Action::ClearSearch),
        (Focus::Search, KeyCode::Char(ch)) if !ctrl => Some(Action::Insert(ch)),
        (Focus::Search, _) => None,

        (Focus::Table, KeyCode::Char('q')) => Some(Action::Quit),
        (Focus::Table, KeyCode::Char('/') | KeyCode::Tab) => Some(Action::FocusSearch),
        (Focus::Table, KeyCode::Char('k')) => Some(Action::Up),
        (Focus::Table, KeyCode::Char('j')) => Some(Action::Down),
        (Focus::Table, KeyCode::Char('h') | KeyCode::Left) => Some(Action::Left),
        (Focus::Table, KeyCode::Char('l') | KeyCode::Right) => Some(Action::Right),
        (Focus::Table, KeyCode::Char('g') | KeyCode::Home) => Some(Action::Home),
        (Focus::Table, KeyCode::Char('G') | KeyCode::End) => Some(Action::End),
        (Focus::Table, KeyCode::Enter | KeyCode::Char(' ')) => Some(Action::Activate),
        (Focus::Table, _) => None,
    }
}
