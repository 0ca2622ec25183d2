use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Quit,
    ToggleHelp,
    NavigateUp,
    NavigateDown,
    OpenTrack,
    FocusInput,
    FocusResults,
    Input(char),
    Backspace,
    ClearInput,
    Submit,
}

pub fn map_key_to_action(key: KeyEvent, input_focused: bool) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UserAction::Quit),
            KeyCode::Char('u') if input_focused => Some(UserAction::ClearInput),
            _ => None,
        };
    }

    if input_focused {
        return match key.code {
            KeyCode::Esc | KeyCode::Tab => Some(UserAction::FocusResults),
            KeyCode::Enter => Some(UserAction::Submit),
            KeyCode::Backspace => Some(UserAction::Backspace),
            KeyCode::Char(c) => Some(UserAction::Input(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(UserAction::Quit),
        KeyCode::Char('?') => Some(UserAction::ToggleHelp),
        KeyCode::Up | KeyCode::Char('k') => Some(UserAction::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UserAction::NavigateDown),
        KeyCode::Enter | KeyCode::Char('o') => Some(UserAction::OpenTrack),
        KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Tab => Some(UserAction::FocusInput),
        KeyCode::Esc => Some(UserAction::FocusInput),
        _ => None,
    }
}
