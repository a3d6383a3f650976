use crate::reading::Token;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Shared playback state: the current line's token sequence, the reading
/// position, and the pause flag, guarded by one mutex so the pacing
/// thread and the input thread never observe a torn sequence/position
/// pair. The rate is fixed for the session; quit is a separate monotonic
/// flag.
pub struct PlaybackState {
    wpm: u32,
    inner: Mutex<Inner>,
    quit: AtomicBool,
}

#[derive(Default)]
struct Inner {
    tokens: Vec<Token>,
    position: usize,
    paused: bool,
}

impl PlaybackState {
    pub fn new(wpm: u32) -> Self {
        Self {
            wpm,
            inner: Mutex::new(Inner::default()),
            quit: AtomicBool::new(false),
        }
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    // Every critical section leaves the fields consistent, so a poisoned
    // lock is still safe to reuse.
    fn locked(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Replaces the token sequence for a new input line. The position
    /// carried over from the previous line is kept, only clamped into
    /// the new bounds.
    pub fn load(&self, tokens: Vec<Token>) {
        let mut inner = self.locked();
        inner.position = inner.position.min(tokens.len().saturating_sub(1));
        inner.tokens = tokens;
    }

    /// Token at the current position, `None` once the sequence is
    /// exhausted or empty.
    pub fn current(&self) -> Option<Token> {
        let inner = self.locked();
        inner.tokens.get(inner.position).cloned()
    }

    pub fn position(&self) -> usize {
        self.locked().position
    }

    /// Steps forward by one. Returns false at the end of the sequence,
    /// which ends the current line rather than signalling an error.
    pub fn advance(&self) -> bool {
        let mut inner = self.locked();
        if inner.position + 1 < inner.tokens.len() {
            inner.position += 1;
            true
        } else {
            false
        }
    }

    /// Steps back one token, stopping at the start. Returns the token
    /// now under the cursor so the caller can render it in the same
    /// atomic step.
    pub fn seek_backward(&self) -> Option<Token> {
        let mut inner = self.locked();
        if inner.position > 0 {
            inner.position -= 1;
        }
        inner.tokens.get(inner.position).cloned()
    }

    /// Steps forward one token. Forward seeks stop one short of the
    /// last index.
    pub fn seek_forward(&self) -> Option<Token> {
        let mut inner = self.locked();
        if inner.position + 1 < inner.tokens.len().saturating_sub(1) {
            inner.position += 1;
        }
        inner.tokens.get(inner.position).cloned()
    }

    pub fn toggle_pause(&self) {
        let mut inner = self.locked();
        inner.paused = !inner.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.locked().paused
    }

    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Release);
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Acquire)
    }
}
