use crate::error::ReaderError;
use std::path::PathBuf;

pub const DEFAULT_WPM: u32 = 400;
pub const DEFAULT_SOURCE: &str = "text.txt";

/// Session configuration: one reading rate and one text source, both
/// fixed for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    pub wpm: u32,
    pub source: PathBuf,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            source: PathBuf::from(DEFAULT_SOURCE),
        }
    }
}

impl ReaderConfig {
    /// Parses `--wpm <n>` (or `-wpm <n>`) and an optional positional
    /// source path. The first positional argument wins; extras are
    /// ignored.
    pub fn from_args<I>(args: I) -> Result<Self, ReaderError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut source_set = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--wpm" | "-wpm" => {
                    let value = args
                        .next()
                        .ok_or(ReaderError::Usage("speedread [--wpm <n>] [file]"))?;
                    config.wpm = parse_wpm(&value)?;
                }
                option if option.starts_with('-') => {
                    return Err(ReaderError::UnknownOption(option.to_string()));
                }
                path => {
                    if !source_set {
                        config.source = PathBuf::from(path);
                        source_set = true;
                    }
                }
            }
        }

        Ok(config)
    }
}

fn parse_wpm(raw: &str) -> Result<u32, ReaderError> {
    match raw.parse::<u32>() {
        Ok(wpm) if wpm > 0 => Ok(wpm),
        _ => Err(ReaderError::InvalidWpm(raw.to_string())),
    }
}
