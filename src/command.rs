use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A recognized key press.
///
/// The directions answer to vi motions (`hjkl`), the AZERTY cluster
/// (`zqsd`), and the arrow keys, so `q` steers left rather than
/// quitting.  The only quit chord is Ctrl-C.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('k' | 'z') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('j' | 's') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('h' | 'q') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('l' | 'd') | KeyCode::Right) => {
                Some(Command::Right)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Char('k'), Some(Command::Up))]
    #[case(KeyCode::Char('z'), Some(Command::Up))]
    #[case(KeyCode::Up, Some(Command::Up))]
    #[case(KeyCode::Char('j'), Some(Command::Down))]
    #[case(KeyCode::Char('s'), Some(Command::Down))]
    #[case(KeyCode::Down, Some(Command::Down))]
    #[case(KeyCode::Char('h'), Some(Command::Left))]
    #[case(KeyCode::Char('q'), Some(Command::Left))]
    #[case(KeyCode::Left, Some(Command::Left))]
    #[case(KeyCode::Char('l'), Some(Command::Right))]
    #[case(KeyCode::Char('d'), Some(Command::Right))]
    #[case(KeyCode::Right, Some(Command::Right))]
    #[case(KeyCode::Char('x'), None)]
    #[case(KeyCode::Esc, None)]
    #[case(KeyCode::Enter, None)]
    fn from_plain_key(#[case] code: KeyCode, #[case] command: Option<Command>) {
        let ev = KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(Command::from_key_event(ev), command);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key_event(ev), Some(Command::Quit));
    }

    #[test]
    fn shifted_letters_are_ignored() {
        let ev = KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT);
        assert_eq!(Command::from_key_event(ev), None);
    }
}
