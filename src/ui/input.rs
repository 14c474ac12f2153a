/// Keyboard input: one blocking keystroke per turn.
///
/// The game is turn-based, so there is no held-key tracking — each
/// `read_command()` blocks until a key press arrives and maps it to a
/// command. Unknown keys are a deliberate no-op turn prompt, not an error.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::domain::entity::Direction;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Direction),
    /// Force a grid doubling.
    Grow,
    Quit,
    /// Unrecognized key: re-prompt without consuming a turn.
    Noop,
}

/// Block until the next key press and translate it.
pub fn read_command() -> io::Result<Command> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                {
                    return Ok(Command::Quit);
                }
                return Ok(translate(key.code));
            }
            // Resize and other terminal events: redraw via Noop
            Event::Resize(_, _) => return Ok(Command::Noop),
            _ => {}
        }
    }
}

/// Block until any key press (end screens).
pub fn wait_any_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(());
            }
        }
    }
}

fn translate(code: KeyCode) -> Command {
    match code {
        KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Char('g') | KeyCode::Char('G') => Command::Grow,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char(c) => match Direction::from_key(c) {
            Some(dir) => Command::Move(dir),
            None => Command::Noop,
        },
        _ => Command::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrows_move() {
        assert_eq!(translate(KeyCode::Char('w')), Command::Move(Direction::Up));
        assert_eq!(translate(KeyCode::Char('A')), Command::Move(Direction::Left));
        assert_eq!(translate(KeyCode::Down), Command::Move(Direction::Down));
        assert_eq!(translate(KeyCode::Right), Command::Move(Direction::Right));
    }

    #[test]
    fn meta_keys() {
        assert_eq!(translate(KeyCode::Char('g')), Command::Grow);
        assert_eq!(translate(KeyCode::Esc), Command::Quit);
        assert_eq!(translate(KeyCode::Char('q')), Command::Quit);
    }

    #[test]
    fn unknown_keys_are_noop() {
        assert_eq!(translate(KeyCode::Char('z')), Command::Noop);
        assert_eq!(translate(KeyCode::Tab), Command::Noop);
    }
}
