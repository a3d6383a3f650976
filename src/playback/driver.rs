use crate::error::ReaderError;
use crate::playback::{PlaybackState, WordDisplay};
use crate::reading::{tokenize, wpm_to_milliseconds};
use std::io::BufRead;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// How often the driver rechecks pause and quit while waiting.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Background playback: walks each line's token sequence from the
/// current position to the end, rendering every token through the
/// display collaborator and pacing multi-character tokens by the
/// session's rate.
pub struct PacingDriver<'a, D> {
    state: &'a PlaybackState,
    display: &'a D,
    delay: Duration,
}

impl<'a, D: WordDisplay> PacingDriver<'a, D> {
    pub fn new(state: &'a PlaybackState, display: &'a D) -> Self {
        let delay = Duration::from_millis(wpm_to_milliseconds(state.wpm()));
        Self {
            state,
            display,
            delay,
        }
    }

    /// Plays the whole source, then flags the session as finished so
    /// the input loop stops as well. I/O and display failures are fatal.
    pub fn run<R: BufRead>(&self, source: R) -> Result<(), ReaderError> {
        let result = self.play_all(source);
        self.state.request_quit();
        result
    }

    fn play_all<R: BufRead>(&self, source: R) -> Result<(), ReaderError> {
        for line in source.lines() {
            if self.state.quit_requested() {
                return Ok(());
            }
            let tokens = tokenize(&line?);
            debug!(tokens = tokens.len(), "line loaded");
            self.state.load(tokens);
            self.play_line()?;
        }
        debug!("text source exhausted");
        Ok(())
    }

    fn play_line(&self) -> Result<(), ReaderError> {
        loop {
            if self.state.quit_requested() {
                return Ok(());
            }
            let Some(token) = self.state.current() else {
                return Ok(());
            };
            self.display.render(&token.text)?;

            // Single-character tokens, isolated punctuation mostly,
            // flash by without a pacing delay.
            if token.text.chars().count() > 1 {
                self.pace();
            }

            while self.state.is_paused() {
                if self.state.quit_requested() {
                    return Ok(());
                }
                // Keep the display alive; re-read so a seek made while
                // paused is what stays on screen.
                if let Some(current) = self.state.current() {
                    self.display.render(&current.text)?;
                }
                thread::sleep(POLL_INTERVAL);
            }

            if !self.state.advance() {
                return Ok(());
            }
        }
    }

    // Sleeps the inter-token delay in short slices so a quit issued
    // mid-sleep still lands within one poll interval.
    fn pace(&self) {
        let mut remaining = self.delay;
        while !remaining.is_zero() {
            if self.state.quit_requested() {
                return;
            }
            let slice = remaining.min(POLL_INTERVAL);
            thread::sleep(slice);
            remaining -= slice;
        }
    }
}
