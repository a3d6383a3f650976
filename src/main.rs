use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use std::thread;

use speedread::config::ReaderConfig;
use speedread::error::ReaderError;
use speedread::playback::{Dispatcher, PacingDriver, PlaybackState};
use speedread::ui::{input, Tui};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    init_tracing();
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("speedread: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), ReaderError> {
    let config = ReaderConfig::from_args(env::args().skip(1))?;
    let file = File::open(&config.source).map_err(|source| ReaderError::OpenSource {
        path: config.source.clone(),
        source,
    })?;
    info!(path = %config.source.display(), wpm = config.wpm, "starting session");

    let state = PlaybackState::new(config.wpm);
    let tui = Tui::new()?;
    let driver = PacingDriver::new(&state, &tui);
    let dispatcher = Dispatcher::new(&state, &tui);

    thread::scope(|scope| {
        let playback = scope.spawn(|| driver.run(BufReader::new(file)));
        let input_result = input::run(&state, &dispatcher);
        // Unblocks the driver even when the input loop exited on an error.
        state.request_quit();
        let playback_result = playback.join().map_err(|_| ReaderError::PlaybackPanicked)?;
        input_result.and(playback_result)
    })
}

// Quiet unless RUST_LOG is set; logs go to stderr so the alternate
// screen stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_filter(filter))
        .init();
}
