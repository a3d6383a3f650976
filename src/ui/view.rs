use crate::ui::theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const READER_WIDTH: u16 = 60;
const READER_HEIGHT: u16 = 3;
const KEY_HINT: &str = "left/right seek   space pause   q quit";

/// Draws the fixed reader box centered on screen with `word` inside it,
/// plus the key hint underneath.
pub fn draw_word(frame: &mut Frame, word: &str) {
    let area = frame.area();

    // Wide words stretch the box rather than being clipped.
    let width = READER_WIDTH.max(word.width() as u16 + 4).min(area.width);
    let reader_area = centered(area, width, READER_HEIGHT);

    let word_line = Line::from(Span::styled(
        word.to_string(),
        Style::default()
            .fg(theme::WORD)
            .add_modifier(Modifier::BOLD),
    ));
    let reader = Paragraph::new(word_line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::FRAME)),
        );

    frame.render_widget(Clear, reader_area);
    frame.render_widget(reader, reader_area);

    if let Some(hint_area) = hint_row(area, reader_area) {
        let hint = Paragraph::new(KEY_HINT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme::HINT));
        frame.render_widget(hint, hint_area);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn hint_row(area: Rect, reader_area: Rect) -> Option<Rect> {
    let y = reader_area.y + reader_area.height + 1;
    if y >= area.y + area.height {
        return None;
    }
    Some(Rect::new(area.x, y, area.width, 1))
}
