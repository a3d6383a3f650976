pub mod command;
pub mod driver;
pub mod state;

pub use command::{Command, Dispatcher};
pub use driver::{PacingDriver, POLL_INTERVAL};
pub use state::PlaybackState;

use crate::error::ReaderError;

/// Terminal display collaborator: clears and rewrites the single reader
/// region with one word. Failures are fatal to the session.
pub trait WordDisplay {
    fn render(&self, word: &str) -> Result<(), ReaderError>;
}
