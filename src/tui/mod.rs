//! Ratatui-based terminal widget.
//!
//! One input field, three conversion panes (length, volume, mass), an
//! accessible summary line, and a status footer. Edits convert live after a
//! quiet period; Enter and F5 convert immediately.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::cli::TuiArgs;
use crate::domain::{ConversionTable, ConvertOutcome};
use crate::error::AppError;
use crate::present::{present, OutputTargets};

pub mod debounce;

use debounce::{Debouncer, QUIESCENT_DELAY};

/// Idle poll cadence when no debounce deadline is pending.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Start the TUI widget.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::terminal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args.value.unwrap_or_default());
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::terminal(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    table: &'static ConversionTable,
    input: String,
    targets: OutputTargets,
    debouncer: Debouncer,
    status: String,
}

impl App {
    fn new(initial_input: String) -> Self {
        let mut app = Self {
            table: ConversionTable::standard(),
            input: initial_input,
            targets: OutputTargets::all_configured(),
            debouncer: Debouncer::new(QUIESCENT_DELAY),
            status: "Type a number; results update when you pause.".to_string(),
        };
        if !app.input.is_empty() {
            app.run_cycle();
        }
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::terminal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            // A pending debounce deadline fires here, reading whatever input
            // text is current at fire time.
            let now = Instant::now();
            if self.debouncer.poll(now) {
                self.run_cycle();
                needs_redraw = true;
                continue;
            }

            let timeout = self
                .debouncer
                .time_until_due(now)
                .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL));
            if !event::poll(timeout)
                .map_err(|e| AppError::terminal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::terminal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            // Enter is the submit trigger, F5 the convert-button trigger.
            // Both bypass the debouncer and run immediately. A still-pending
            // deadline may fire later; the pipeline is idempotent for
            // unchanged input, so the re-render is a no-op.
            KeyCode::Enter | KeyCode::F(5) => {
                self.run_cycle();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                self.debouncer.notify(Instant::now());
                self.status = "Input cleared.".to_string();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.debouncer.notify(Instant::now());
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                self.debouncer.notify(Instant::now());
            }
            _ => {}
        }
        false
    }

    fn run_cycle(&mut self) {
        let outcome = crate::app::pipeline::run_convert(&self.input, self.table);
        self.status = match &outcome {
            ConvertOutcome::Converted(result) => format!("Converted {}.", result.value),
            ConvertOutcome::Rejected { .. } => "Waiting for a valid number.".to_string(),
        };
        present(&outcome, &mut self.targets);
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_input(frame, chunks[1]);
        self.draw_body(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled("uc", Style::default().fg(Color::Cyan)),
            Span::raw(" — fixed-ratio unit conversions (length, volume, mass)"),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_input(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.input.as_str())
            .block(Block::default().title("Value").borders(Borders::ALL));
        frame.render_widget(p, area);

        let cursor_x = area.x + 1 + self.input.chars().count().min(area.width.saturating_sub(2) as usize) as u16;
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        for (i, ratio) in self.table.ratios().iter().enumerate() {
            let title = format!(
                "{} ({} / {})",
                ratio.kind.display_name(),
                ratio.forward_unit,
                ratio.backward_unit
            );
            let text = self.targets.pairs[i].as_deref().unwrap_or("");
            let p = Paragraph::new(text).block(Block::default().title(title).borders(Borders::ALL));
            frame.render_widget(p, chunks[i]);
        }

        let summary = self.targets.summary.as_deref().unwrap_or("");
        let p = Paragraph::new(Text::from(summary))
            .style(Style::default().fg(Color::Green))
            .block(Block::default().title("Summary").borders(Borders::ALL));
        frame.render_widget(p, chunks[3]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "Enter/F5 convert  Ctrl+U clear  Esc quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::INVALID_INPUT_MESSAGE;

    #[test]
    fn prefilled_value_converts_on_startup() {
        let app = App::new("5".to_string());
        assert_eq!(
            app.targets.pairs[0].as_deref(),
            Some("5 metres = 16.404 feet | 5 feet = 1.524 metres")
        );
        assert!(app.status.starts_with("Converted"));
    }

    #[test]
    fn edits_rearm_the_debouncer() {
        let mut app = App::new(String::new());
        assert!(!app.debouncer.is_pending());

        app.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE));
        assert_eq!(app.input, "5");
        assert!(app.debouncer.is_pending());

        app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(app.input, "");
        assert!(app.debouncer.is_pending());
    }

    #[test]
    fn explicit_trigger_converts_immediately_and_leaves_deadline_alone() {
        let mut app = App::new(String::new());
        app.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE));

        // Enter runs the cycle without waiting for the quiet period.
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(app.targets.pairs[0].as_deref().unwrap().contains("16.404 feet"));

        // The pending deadline survives; a later fire re-renders identically.
        assert!(app.debouncer.is_pending());
        let before = app.targets.clone();
        app.run_cycle();
        assert_eq!(before, app.targets);
    }

    #[test]
    fn empty_input_shows_the_message_in_every_pane() {
        let mut app = App::new(String::new());
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        for slot in &app.targets.pairs {
            assert_eq!(slot.as_deref(), Some(INVALID_INPUT_MESSAGE));
        }
        // Summary pane stays blank until the first success.
        assert_eq!(app.targets.summary.as_deref(), Some(""));
    }

    #[test]
    fn escape_quits() {
        let mut app = App::new(String::new());
        assert!(app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }
}
