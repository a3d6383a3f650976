pub mod input;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use terminal::Tui;
pub use terminal_guard::TerminalGuard;
