use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid words-per-minute value {0:?}: expected a positive integer")]
    InvalidWpm(String),

    #[error("unrecognized option {0:?}")]
    UnknownOption(String),

    #[error("cannot open {path}: {source}")]
    OpenSource { path: PathBuf, source: io::Error },

    #[error("failed reading text source: {0}")]
    Read(#[from] io::Error),

    #[error("terminal failure: {0}")]
    Terminal(io::Error),

    #[error("playback thread panicked")]
    PlaybackPanicked,
}
