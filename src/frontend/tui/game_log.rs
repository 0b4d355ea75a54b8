//! Round-outcome log panel; shows the newest entries that fit.

use crate::data::GameLog;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct GameLogPanel<'a> {
    log: &'a GameLog,
    show_timestamps: bool,
}

impl<'a> GameLogPanel<'a> {
    pub fn new(log: &'a GameLog, show_timestamps: bool) -> Self {
        Self {
            log,
            show_timestamps,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme, border: BorderType) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border)
            .border_style(Style::default().fg(theme.window_border))
            .title("Log")
            .title_style(Style::default().fg(theme.window_title));
        let inner = block.inner(area);

        let visible = inner.height as usize;
        let skip = self.log.len().saturating_sub(visible);

        let lines: Vec<Line> = self
            .log
            .entries()
            .skip(skip)
            .map(|entry| {
                let mut spans = Vec::with_capacity(2);
                if self.show_timestamps {
                    spans.push(Span::styled(
                        entry.time.format("[%H:%M:%S] ").to_string(),
                        Style::default().fg(theme.log_timestamp),
                    ));
                }
                spans.push(Span::styled(
                    entry.text.clone(),
                    Style::default().fg(theme.text_primary),
                ));
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
