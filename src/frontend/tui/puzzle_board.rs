//! The puzzle panel: the reveal buffer with a space between characters.

use crate::game::Puzzle;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct PuzzleBoard<'a> {
    puzzle: Option<&'a Puzzle>,
    placeholder: char,
}

impl<'a> PuzzleBoard<'a> {
    pub fn new(puzzle: Option<&'a Puzzle>, placeholder: char) -> Self {
        Self {
            puzzle,
            placeholder,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme, border: BorderType) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border)
            .border_style(Style::default().fg(theme.window_border))
            .title("Puzzle")
            .title_style(Style::default().fg(theme.window_title));

        let line = match self.puzzle {
            Some(puzzle) => {
                let spans: Vec<Span> = puzzle
                    .display()
                    .chars()
                    .map(|ch| {
                        let style = if ch == self.placeholder {
                            Style::default().fg(theme.puzzle_placeholder)
                        } else {
                            Style::default().fg(theme.puzzle_letter)
                        };
                        Span::styled(ch.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            }
            None => Line::styled(
                "waiting for a puzzle...",
                Style::default().fg(theme.text_disabled),
            ),
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
