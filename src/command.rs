use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Left,
    Right,
    Wider,
    Narrower,
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (m, _) if !normal_modifiers.contains(m) => None,
            (_, KeyCode::Esc | KeyCode::Char('q')) => Some(Command::Quit),
            (_, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (_, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Char(']' | '+')) => Some(Command::Wider),
            (_, KeyCode::Char('[' | '-')) => Some(Command::Narrower),
            (_, KeyCode::Char(' ' | 'r')) => Some(Command::Restart),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Char('h'), KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Char('d'), KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Char('+'), KeyModifiers::SHIFT, Some(Command::Wider))]
    #[case(KeyCode::Char('['), KeyModifiers::NONE, Some(Command::Narrower))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Command::Restart))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Left, KeyModifiers::ALT, None)]
    #[case(KeyCode::Char('x'), KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }
}
