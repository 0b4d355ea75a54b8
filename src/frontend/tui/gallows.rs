//! The gallows figure: one body part per wrong guess, six parts total.
//!
//! Layout:
//!  ┌─────┐
//!  │     │
//!  │     O
//!  │    /|\
//!  │    / \
//!  ┴
//!
//! The scaffold is always drawn; body parts appear as the miss count grows.

use crate::core::app_core::GALLOWS_PARTS;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Widget},
};

// Drawn glyph grid is 8 cols by 6 rows.
const CONTENT_WIDTH: u16 = 8;
const CONTENT_HEIGHT: u16 = 6;

// Scaffold cells, always visible: (col, row, char)
const FRAME: [(u16, u16, char); 13] = [
    (0, 0, '┌'),
    (1, 0, '─'),
    (2, 0, '─'),
    (3, 0, '─'),
    (4, 0, '─'),
    (5, 0, '─'),
    (6, 0, '┐'),
    (0, 1, '│'),
    (6, 1, '│'),
    (0, 2, '│'),
    (0, 3, '│'),
    (0, 4, '│'),
    (0, 5, '┴'),
];

// Body part cells in reveal order: head, torso, arms, legs.
const PARTS: [(u16, u16, char); GALLOWS_PARTS] = [
    (6, 2, 'O'),
    (6, 3, '|'),
    (5, 3, '/'),
    (7, 3, '\\'),
    (5, 4, '/'),
    (7, 4, '\\'),
];

pub struct Gallows {
    wrong_guesses: usize,
}

impl Gallows {
    pub fn new(wrong_guesses: usize) -> Self {
        Self {
            wrong_guesses: wrong_guesses.min(GALLOWS_PARTS),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme, border: BorderType) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border)
            .border_style(Style::default().fg(theme.window_border))
            .title(format!("Gallows [{}/{}]", self.wrong_guesses, GALLOWS_PARTS))
            .title_style(Style::default().fg(theme.window_title));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Center the figure in the available space.
        let col_offset = inner.width.saturating_sub(CONTENT_WIDTH) / 2;
        let row_offset = inner.height.saturating_sub(CONTENT_HEIGHT) / 2;

        let mut put = |col: u16, row: u16, ch: char, color| {
            let x = inner.x + col + col_offset;
            let y = inner.y + row + row_offset;
            if x < inner.x + inner.width && y < inner.y + inner.height {
                buf[(x, y)].set_char(ch);
                buf[(x, y)].set_fg(color);
            }
        };

        for (col, row, ch) in FRAME.iter() {
            put(*col, *row, *ch, theme.gallows_frame);
        }
        for (col, row, ch) in PARTS.iter().take(self.wrong_guesses) {
            put(*col, *row, *ch, theme.gallows_body);
        }
    }
}
