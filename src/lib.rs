//! Terminal RSVP reader: words from a plain-text file are flashed one at
//! a time in a fixed region, paced by a words-per-minute rate, with
//! keyboard control over pause and position.

pub mod config;
pub mod error;
pub mod playback;
pub mod reading;
pub mod ui;
