use ratatui::style::Color;

/// Reader colors: the word itself is red, matching the ANSI red the
/// tool has always used; everything else stays out of the way.
pub const WORD: Color = Color::Red;
pub const FRAME: Color = Color::DarkGray;
pub const HINT: Color = Color::DarkGray;
