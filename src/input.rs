use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AnalyticsTab, AppState};

/// A user intent derived from a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The input line now reads this text
    TextChange(String),
    /// Judge the typed word and advance
    Commit,
    Restart,
    OpenAnalytics,
    CloseAnalytics,
    NextTab,
    PreviousTab,
    SelectTab(AnalyticsTab),
    Quit,
}

/// Map a key press to an intent for the view currently on screen.
///
/// `buffer` is the live typed text of the session, read at the time of the
/// key press.
pub fn intent_for(state: &AppState, key: KeyEvent, buffer: &str) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    match state {
        AppState::Typing => typing_intent(key, buffer),
        AppState::Results => match key.code {
            KeyCode::Char('r') => Some(Intent::Restart),
            KeyCode::Char('a') | KeyCode::Tab => Some(Intent::OpenAnalytics),
            KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
            _ => None,
        },
        AppState::Analytics => match key.code {
            KeyCode::Right | KeyCode::Tab => Some(Intent::NextTab),
            KeyCode::Left | KeyCode::BackTab => Some(Intent::PreviousTab),
            KeyCode::Char('c') => Some(Intent::SelectTab(AnalyticsTab::Correct)),
            KeyCode::Char('w') => Some(Intent::SelectTab(AnalyticsTab::Wrong)),
            KeyCode::Char('a') | KeyCode::Esc => Some(Intent::CloseAnalytics),
            KeyCode::Char('r') => Some(Intent::Restart),
            _ => None,
        },
    }
}

fn typing_intent(key: KeyEvent, buffer: &str) -> Option<Intent> {
    match key.code {
        KeyCode::Esc => Some(Intent::Quit),
        // space never reaches the buffer
        KeyCode::Char(' ') => Some(Intent::Commit),
        KeyCode::Char(c) => {
            let mut text = buffer.to_string();
            text.push(c);
            Some(Intent::TextChange(text))
        }
        KeyCode::Backspace if !buffer.is_empty() => {
            let mut text = buffer.to_string();
            text.pop();
            Some(Intent::TextChange(text))
        }
        _ => None,
    }
}
