//! Vowel and consonant selection grids.
//!
//! Mirrors the letter buttons of the board: already-guessed letters are
//! dimmed out, and the grid a pick is expected from gets the active border.

use crate::data::InputMode;
use crate::game::{letters, GameSession};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct LetterBoard<'a> {
    session: &'a GameSession,
    mode: &'a InputMode,
}

impl<'a> LetterBoard<'a> {
    pub fn new(session: &'a GameSession, mode: &'a InputMode) -> Self {
        Self { session, mode }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme, border: BorderType) {
        let chunks =
            Layout::horizontal([Constraint::Length(10), Constraint::Min(18)]).split(area);

        self.render_grid(
            chunks[0],
            buf,
            theme,
            border,
            "Vowels",
            &letters::VOWELS,
            2,
            *self.mode == InputMode::VowelPick,
            |s, ch| s.is_vowel_guessed(ch),
        );
        self.render_grid(
            chunks[1],
            buf,
            theme,
            border,
            "Consonants",
            &letters::CONSONANTS,
            7,
            *self.mode == InputMode::ConsonantPick,
            |s, ch| s.is_consonant_guessed(ch),
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn render_grid(
        &self,
        area: Rect,
        buf: &mut Buffer,
        theme: &AppTheme,
        border: BorderType,
        title: &str,
        table: &[char],
        columns: usize,
        active: bool,
        guessed: impl Fn(&GameSession, char) -> bool,
    ) {
        let border_color = if active {
            theme.window_border_active
        } else {
            theme.window_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border)
            .border_style(Style::default().fg(border_color))
            .title(title.to_string())
            .title_style(Style::default().fg(theme.window_title));

        let mut lines = Vec::new();
        for row in table.chunks(columns) {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for ch in row {
                let style = if guessed(self.session, *ch) {
                    Style::default()
                        .fg(theme.text_disabled)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else if active {
                    Style::default()
                        .fg(theme.text_primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_secondary)
                };
                spans.push(Span::styled(ch.to_string(), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
