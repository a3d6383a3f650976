use speedread::config::ReaderConfig;
use speedread::error::ReaderError;
use speedread::playback::{Command, Dispatcher, PacingDriver, PlaybackState, WordDisplay};
use speedread::reading::tokenize;
use std::fs::{self, File};
use std::io::{BufReader, Cursor, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

struct RecordingDisplay {
    rendered: Mutex<Vec<String>>,
}

impl RecordingDisplay {
    fn new() -> Self {
        Self {
            rendered: Mutex::new(Vec::new()),
        }
    }

    fn words(&self) -> Vec<String> {
        self.rendered.lock().unwrap().clone()
    }
}

impl WordDisplay for RecordingDisplay {
    fn render(&self, word: &str) -> Result<(), ReaderError> {
        self.rendered.lock().unwrap().push(word.to_string());
        Ok(())
    }
}

#[test]
fn end_to_end_reading_order() {
    let test_file = "test_e2e_order.txt";
    let mut file = File::create(test_file).unwrap();
    writeln!(file, "one two").unwrap();
    writeln!(file, "three").unwrap();

    // A very high rate keeps the pacing delays negligible.
    let state = PlaybackState::new(60_000);
    let display = RecordingDisplay::new();
    let driver = PacingDriver::new(&state, &display);
    driver
        .run(BufReader::new(File::open(test_file).unwrap()))
        .unwrap();

    assert_eq!(display.words(), vec!["one", "two", "three"]);
    assert!(state.quit_requested());

    fs::remove_file(test_file).unwrap();
}

#[test]
fn end_to_end_with_tokenized_punctuation() {
    let test_file = "test_e2e_punct.txt";
    let mut file = File::create(test_file).unwrap();
    writeln!(file, "Don't panic, reader!").unwrap();

    let state = PlaybackState::new(60_000);
    let display = RecordingDisplay::new();
    let driver = PacingDriver::new(&state, &display);
    driver
        .run(BufReader::new(File::open(test_file).unwrap()))
        .unwrap();

    assert_eq!(display.words(), vec!["Don't", "panic", ",", "reader", "!"]);

    fs::remove_file(test_file).unwrap();
}

#[test]
fn seeks_during_playback_move_the_shared_position() {
    let state = PlaybackState::new(400);
    state.load(tokenize("alpha beta gamma delta"));
    let display = RecordingDisplay::new();
    let dispatcher = Dispatcher::new(&state, &display);

    dispatcher.dispatch(Command::SeekForward).unwrap();
    dispatcher.dispatch(Command::SeekForward).unwrap();
    dispatcher.dispatch(Command::SeekBackward).unwrap();
    assert_eq!(display.words(), vec!["beta", "gamma", "beta"]);
    assert_eq!(state.position(), 1);
}

#[test]
fn quit_during_pause_terminates_promptly() {
    let state = PlaybackState::new(60);
    let display = RecordingDisplay::new();
    let driver = PacingDriver::new(&state, &display);
    state.toggle_pause();

    thread::scope(|scope| {
        let handle = scope.spawn(|| driver.run(Cursor::new("nothing advances while paused")));

        thread::sleep(Duration::from_millis(150));
        let issued = Instant::now();
        state.request_quit();
        handle.join().unwrap().unwrap();
        assert!(issued.elapsed() < Duration::from_millis(250));
    });

    // Only the first token was ever on screen.
    assert!(display.words().iter().all(|w| w == "nothing"));
}

#[test]
fn config_defaults_match_the_session_contract() {
    let config = ReaderConfig::from_args(Vec::new()).unwrap();
    assert_eq!(config.wpm, 400);
    assert_eq!(config.source, PathBuf::from("text.txt"));
}
