use crate::error::ReaderError;
use crate::playback::{Command, Dispatcher, PlaybackState, WordDisplay, POLL_INTERVAL};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input source loop: polls the terminal for keypresses and forwards
/// them to the dispatcher, one at a time, until the session ends.
pub fn run<D: WordDisplay>(
    state: &PlaybackState,
    dispatcher: &Dispatcher<'_, D>,
) -> Result<(), ReaderError> {
    while !state.quit_requested() {
        if !event::poll(POLL_INTERVAL).map_err(ReaderError::Terminal)? {
            continue;
        }
        match event::read().map_err(ReaderError::Terminal)? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = command_for(key) {
                    dispatcher.dispatch(command)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn command_for(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left => Some(Command::SeekBackward),
        KeyCode::Right => Some(Command::SeekForward),
        KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_map_to_seeks() {
        assert_eq!(command_for(press(KeyCode::Left)), Some(Command::SeekBackward));
        assert_eq!(command_for(press(KeyCode::Right)), Some(Command::SeekForward));
    }

    #[test]
    fn test_space_toggles_pause() {
        assert_eq!(
            command_for(press(KeyCode::Char(' '))),
            Some(Command::TogglePause)
        );
    }

    #[test]
    fn test_quit_bindings() {
        assert_eq!(command_for(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(command_for(press(KeyCode::Char('x'))), None);
        assert_eq!(command_for(press(KeyCode::Enter)), None);
    }
}
