use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press, reduced to what the screens care about
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    /// Ctrl-C: leave the program from anywhere
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Esc,
    Home,
    End,
    /// Tab
    Next,
    /// Shift-Tab
    Prev,
    M,
    P,
    Q,
    R,
}

impl Command {
    /// Letter keys are matched case-insensitively so that the game still
    /// responds with Caps Lock on.
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        if ev.modifiers == KeyModifiers::CONTROL {
            return (ev.code == KeyCode::Char('c')).then_some(Command::Quit);
        }
        let plain = ev.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        match ev.code {
            KeyCode::Char(ch) if plain => Command::from_char(ch.to_ascii_lowercase()),
            KeyCode::Up if plain => Some(Command::Up),
            KeyCode::Down if plain => Some(Command::Down),
            KeyCode::Left if plain => Some(Command::Left),
            KeyCode::Right if plain => Some(Command::Right),
            KeyCode::Enter => Some(Command::Enter),
            KeyCode::Esc => Some(Command::Esc),
            KeyCode::Home => Some(Command::Home),
            KeyCode::End => Some(Command::End),
            KeyCode::Tab => Some(Command::Next),
            KeyCode::BackTab => Some(Command::Prev),
            _ => None,
        }
    }

    fn from_char(ch: char) -> Option<Command> {
        match ch {
            'w' | 'k' => Some(Command::Up),
            's' | 'j' => Some(Command::Down),
            'a' | 'h' => Some(Command::Left),
            'd' | 'l' => Some(Command::Right),
            ' ' => Some(Command::Space),
            'm' => Some(Command::M),
            'p' => Some(Command::P),
            'q' => Some(Command::Q),
            'r' => Some(Command::R),
            _ => None,
        }
    }
}
