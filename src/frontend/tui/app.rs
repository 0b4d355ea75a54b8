//! TUI frontend: terminal lifetime, event polling, and the render pass.
//!
//! The terminal goes into raw mode and the alternate screen for the life of
//! the frontend and is restored on Drop even if cleanup() was never called.

use crate::core::AppCore;
use crate::data::{InputMode, StatusLevel};
use crate::frontend::tui::{
    border_type, dialog::InputDialog, gallows::Gallows, game_log::GameLogPanel,
    letter_board::LetterBoard, players::PlayersPanel, puzzle_board::PuzzleBoard,
    wheel_panel::WheelPanel,
};
use crate::frontend::FrontendEvent;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Terminal,
};
use std::io;
use std::time::Duration;

pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,

    /// Modal input dialog, when the current mode needs one.
    pub dialog: Option<InputDialog>,
}

impl TuiFrontend {
    /// Create a new TUI frontend: raw mode plus alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(33),
            dialog: None,
        })
    }

    pub fn set_poll_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    /// Drain all pending terminal events into frontend events.
    pub fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        while event::poll(self.poll_timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
        }

        Ok(events)
    }

    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only key presses; repeats and releases are noise here.
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                if key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Some(FrontendEvent::Quit);
                }
                Some(FrontendEvent::Key {
                    code: key_event.code,
                    modifiers: key_event.modifiers,
                })
            }
            Event::Resize(w, h) => Some(FrontendEvent::Resize {
                width: w,
                height: h,
            }),
            _ => None,
        }
    }

    /// Draw the whole board from the core's current state.
    pub fn render(&mut self, core: &AppCore) -> Result<()> {
        let theme = &core.theme;
        let border = border_type(&core.config.ui.border_style);
        let dialog = &self.dialog;

        self.terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            let rows = Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(8),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

            PlayersPanel::new(&core.session).render(rows[0], buf, theme, border);

            let middle = Layout::horizontal([
                Constraint::Length(46),
                Constraint::Length(16),
                Constraint::Min(20),
            ])
            .split(rows[1]);
            WheelPanel::new(
                core.last_spin,
                core.session.pending_award(),
                &core.ui_state.input_mode,
                core.can_spin(),
                core.can_buy_vowel(),
            )
            .render(middle[0], buf, theme, border);
            Gallows::new(core.wrong_guesses).render(middle[1], buf, theme, border);
            LetterBoard::new(&core.session, &core.ui_state.input_mode)
                .render(middle[2], buf, theme, border);

            PuzzleBoard::new(core.puzzle.as_ref(), core.config.placeholder_char())
                .render(rows[2], buf, theme, border);

            GameLogPanel::new(&core.log, core.config.ui.show_timestamps)
                .render(rows[3], buf, theme, border);

            let status_color = match core.ui_state.status_level {
                StatusLevel::Info => theme.status_info,
                StatusLevel::Success => theme.status_success,
                StatusLevel::Warning => theme.status_warning,
                StatusLevel::Error => theme.status_error,
            };
            Paragraph::new(core.ui_state.status_text.as_str())
                .style(Style::default().fg(status_color))
                .render(rows[4], buf);

            if core.ui_state.input_mode == InputMode::GameOver {
                Self::render_game_over(core, area, buf);
            }

            if let Some(dialog) = dialog {
                dialog.render(area, buf, theme, border);
            }
        })?;

        Ok(())
    }

    fn render_game_over(core: &AppCore, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let Some(winner) = core.winner.as_ref() else {
            return;
        };
        let theme = &core.theme;

        let width = 36u16.min(area.width);
        let height = 5u16.min(area.height);
        let rect = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        Clear.render(rect, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.status_success))
            .style(Style::default().bg(theme.dialog_background))
            .title("Game Over");
        let lines = vec![
            Line::styled(
                format!("{} wins ${}", winner.name, winner.balance),
                Style::default()
                    .fg(theme.status_success)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled("Press Q to exit", Style::default().fg(theme.text_secondary)),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(rect, buf);
    }

    /// Restore the terminal.
    pub fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Terminal must come back even if cleanup() was never called.
        let _ = self.cleanup();
    }
}
