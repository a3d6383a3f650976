use crate::error::ReaderError;
use crate::playback::WordDisplay;
use crate::ui::view;
use crate::ui::TerminalGuard;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Mutex;

/// Production display: a ratatui terminal behind a mutex, so the pacing
/// thread and the input thread can both repaint the reader region.
pub struct Tui {
    terminal: Mutex<Terminal<CrosstermBackend<Stdout>>>,
    _guard: TerminalGuard,
}

impl Tui {
    pub fn new() -> Result<Self, ReaderError> {
        let guard = TerminalGuard::new().map_err(ReaderError::Terminal)?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).map_err(ReaderError::Terminal)?;

        Ok(Self {
            terminal: Mutex::new(terminal),
            _guard: guard,
        })
    }
}

impl WordDisplay for Tui {
    fn render(&self, word: &str) -> Result<(), ReaderError> {
        let mut terminal = match self.terminal.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        terminal
            .draw(|frame| view::draw_word(frame, word))
            .map_err(ReaderError::Terminal)?;
        Ok(())
    }
}
