use crate::error::ReaderError;
use crate::playback::{PlaybackState, WordDisplay};
use tracing::{debug, trace};

/// Discrete input events delivered by the host input loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SeekBackward,
    SeekForward,
    TogglePause,
    Quit,
}

/// Maps input events onto single atomic playback-state mutations.
/// Seeks repaint the display immediately; pause and quit do not.
pub struct Dispatcher<'a, D> {
    state: &'a PlaybackState,
    display: &'a D,
}

impl<'a, D: WordDisplay> Dispatcher<'a, D> {
    pub fn new(state: &'a PlaybackState, display: &'a D) -> Self {
        Self { state, display }
    }

    pub fn dispatch(&self, command: Command) -> Result<(), ReaderError> {
        match command {
            Command::SeekBackward => {
                if let Some(token) = self.state.seek_backward() {
                    trace!(position = self.state.position(), "seek backward");
                    self.display.render(&token.text)?;
                }
            }
            Command::SeekForward => {
                if let Some(token) = self.state.seek_forward() {
                    trace!(position = self.state.position(), "seek forward");
                    self.display.render(&token.text)?;
                }
            }
            Command::TogglePause => {
                self.state.toggle_pause();
                debug!(paused = self.state.is_paused(), "pause toggled");
            }
            Command::Quit => {
                debug!("quit requested");
                self.state.request_quit();
            }
        }
        Ok(())
    }
}
