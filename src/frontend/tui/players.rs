//! Per-player balance panels along the top of the board.
//!
//! One titled box per player; the current player's border is drawn in the
//! active color, everyone else in the default.

use crate::game::GameSession;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct PlayersPanel<'a> {
    session: &'a GameSession,
}

impl<'a> PlayersPanel<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme, border: BorderType) {
        let players = self.session.players();
        if players.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let constraints =
            vec![Constraint::Ratio(1, players.len() as u32); players.len()];
        let chunks = Layout::horizontal(constraints).split(area);

        for (index, player) in players.iter().enumerate() {
            let active = index == self.session.current_index();
            let border_color = if active {
                theme.window_border_active
            } else {
                theme.window_border
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border)
                .border_style(Style::default().fg(border_color))
                .title(player.name().to_string())
                .title_style(Style::default().fg(theme.window_title));

            let balance = Paragraph::new(format!("${}", player.balance()))
                .style(Style::default().fg(theme.balance))
                .alignment(Alignment::Center)
                .block(block);

            balance.render(chunks[index], buf);
        }
    }
}
