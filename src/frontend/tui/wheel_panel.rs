//! The wheel panel: last spin outcome, the armed award, and key hints.

use crate::data::InputMode;
use crate::game::Wedge;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct WheelPanel<'a> {
    last_spin: Option<Wedge>,
    pending_award: i64,
    mode: &'a InputMode,
    can_spin: bool,
    can_buy: bool,
}

impl<'a> WheelPanel<'a> {
    pub fn new(
        last_spin: Option<Wedge>,
        pending_award: i64,
        mode: &'a InputMode,
        can_spin: bool,
        can_buy: bool,
    ) -> Self {
        Self {
            last_spin,
            pending_award,
            mode,
            can_spin,
            can_buy,
        }
    }

    fn wedge_style(&self, wedge: Wedge, theme: &AppTheme) -> Style {
        let color = match wedge {
            Wedge::Cash(_) => theme.wedge_cash,
            Wedge::Bankrupt => theme.wedge_bankrupt,
            Wedge::LoseTurn => theme.wedge_lose_turn,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    // Only the actions currently available are offered, the way the
    // board's buttons enable and disable.
    fn hint(&self) -> String {
        match self.mode {
            InputMode::ActionSelect => {
                let mut parts = Vec::new();
                if self.can_spin {
                    parts.push("S spin");
                }
                if self.can_buy {
                    parts.push("B buy vowel");
                }
                parts.push("Enter solve");
                parts.push("Q quit");
                parts.join(" · ")
            }
            InputMode::ConsonantPick => "type a consonant".to_string(),
            InputMode::VowelPick => "type a vowel".to_string(),
            InputMode::GameOver => "Q quit".to_string(),
            _ => String::new(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme, border: BorderType) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border)
            .border_style(Style::default().fg(theme.window_border))
            .title("Wheel")
            .title_style(Style::default().fg(theme.window_title));

        let mut lines = Vec::new();
        match self.last_spin {
            Some(wedge) => lines.push(Line::from(vec![
                Span::styled("Last spin: ", Style::default().fg(theme.text_secondary)),
                Span::styled(wedge.to_string(), self.wedge_style(wedge, theme)),
            ])),
            None => lines.push(Line::styled(
                "The wheel has not been spun",
                Style::default().fg(theme.text_disabled),
            )),
        }

        if *self.mode == InputMode::ConsonantPick {
            lines.push(Line::from(vec![
                Span::styled("At stake: ", Style::default().fg(theme.text_secondary)),
                Span::styled(
                    format!("${}", self.pending_award),
                    Style::default().fg(theme.balance),
                ),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled(
            self.hint(),
            Style::default().fg(theme.text_secondary),
        ));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
