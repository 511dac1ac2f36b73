use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Cancel,
    NextField,
    Submit,
    Backspace,
    Up,
    Down,
    Like,
    Edit,
    Delete,
    Compose,
    ToggleSort,
    Input(char),
    None,
}

/// Maps `key` to an action. While `typing`, printable keys are text.
pub fn map_key(key: KeyEvent, typing: bool) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return AppAction::Quit;
        }
        return AppAction::None;
    }

    match key.code {
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Char(ch) if typing => AppAction::Input(ch),
        KeyCode::Char('q') => AppAction::Quit,
        KeyCode::Char('k') => AppAction::Up,
        KeyCode::Char('j') => AppAction::Down,
        KeyCode::Char('l') => AppAction::Like,
        KeyCode::Char('e') => AppAction::Edit,
        KeyCode::Char('d') => AppAction::Delete,
        KeyCode::Char('n') => AppAction::Compose,
        KeyCode::Char('s') => AppAction::ToggleSort,
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_are_commands_while_browsing() {
        assert_eq!(map_key(key(KeyCode::Char('l')), false), AppAction::Like);
        assert_eq!(map_key(key(KeyCode::Char('q')), false), AppAction::Quit);
        assert_eq!(map_key(key(KeyCode::Char('j')), false), AppAction::Down);
    }

    #[test]
    fn letters_are_text_while_typing() {
        assert_eq!(map_key(key(KeyCode::Char('q')), true), AppAction::Input('q'));
        assert_eq!(map_key(key(KeyCode::Enter), true), AppAction::Submit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, true), AppAction::Quit);
        assert_eq!(map_key(ctrl_c, false), AppAction::Quit);
    }
}
