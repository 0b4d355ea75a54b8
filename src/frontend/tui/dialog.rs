//! Modal single-field input dialog.
//!
//! Used for every prompt: player count, player names, the puzzle, and solve
//! attempts. The dialog cannot be dismissed and only accepts a submit once
//! the field is non-empty.

use crate::data::InputMode;
use crate::theme::AppTheme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use tui_textarea::TextArea;

const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 7;

pub struct InputDialog {
    /// The mode this dialog was opened for; used to detect staleness.
    mode: InputMode,
    title: String,
    message: String,
    field: TextArea<'static>,
}

impl InputDialog {
    pub fn new(mode: InputMode, title: &str, message: &str) -> Self {
        let mut field = TextArea::default();
        field.set_cursor_line_style(Style::default());
        Self {
            mode,
            title: title.to_string(),
            message: message.to_string(),
            field,
        }
    }

    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    /// Feed a key press. Returns the entry text on a non-empty submit;
    /// everything else (including Esc) keeps the dialog open.
    pub fn input(&mut self, key: KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Enter => {
                let text = self.field.lines().join(" ").trim().to_string();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            KeyCode::Esc => None,
            _ => {
                self.field.input(key);
                None
            }
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme, border: BorderType) {
        let width = DIALOG_WIDTH.min(area.width);
        let height = DIALOG_HEIGHT.min(area.height);
        let rect = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        Clear.render(rect, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border)
            .border_style(Style::default().fg(theme.dialog_border))
            .style(Style::default().bg(theme.dialog_background))
            .title(self.title.as_str())
            .title_style(Style::default().fg(theme.window_title));
        let inner = block.inner(rect);
        block.render(rect, buf);

        if inner.height < 3 {
            return;
        }

        let message_area = Rect {
            height: 1,
            ..inner
        };
        Paragraph::new(self.message.as_str())
            .style(Style::default().fg(theme.text_primary))
            .render(message_area, buf);

        let field_area = Rect {
            y: inner.y + 2,
            height: 1,
            ..inner
        };
        let mut field = self.field.clone();
        field.set_style(
            Style::default()
                .fg(theme.text_primary)
                .bg(theme.dialog_field_background),
        );
        (&field).render(field_area, buf);

        if inner.height >= 4 {
            let hint_area = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            Paragraph::new("Enter to confirm")
                .style(Style::default().fg(theme.text_disabled))
                .render(hint_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut InputDialog, code: KeyCode) -> Option<String> {
        dialog.input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn empty_submit_is_refused() {
        let mut dialog = InputDialog::new(InputMode::PuzzleEntry, "Puzzle", "Enter a puzzle");
        assert_eq!(press(&mut dialog, KeyCode::Enter), None);
        assert_eq!(press(&mut dialog, KeyCode::Char(' ')), None);
        assert_eq!(press(&mut dialog, KeyCode::Enter), None);
    }

    #[test]
    fn typed_text_is_submitted_trimmed() {
        let mut dialog = InputDialog::new(InputMode::PlayerName(0), "Player Name", "Enter name");
        for ch in "Ada ".chars() {
            assert_eq!(press(&mut dialog, KeyCode::Char(ch)), None);
        }
        assert_eq!(press(&mut dialog, KeyCode::Enter), Some("Ada".to_string()));
    }

    #[test]
    fn escape_does_not_dismiss() {
        let mut dialog = InputDialog::new(InputMode::PlayerCount, "Number of Players", "How many?");
        assert_eq!(press(&mut dialog, KeyCode::Esc), None);
        assert_eq!(dialog.mode(), &InputMode::PlayerCount);
    }
}
