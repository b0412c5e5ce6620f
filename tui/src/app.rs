//! Main Application
//!
//! The App is a thin demo surface over `scrambler-core`: it owns a
//! [`ScrambleLabel`], translates keys into the label's public operations,
//! and renders whatever the label currently displays. All animation logic
//! lives in the core; this file is presentation glue.
//!
//! Controls mirror the original sample app (text field, character-set
//! selector, two buttons):
//!
//! - type / backspace: edit the target text
//! - Tab: cycle the character set
//! - Enter: settle and reveal
//! - Ctrl-F: loop forever
//! - Esc: stop
//! - Ctrl-C: quit

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

use scrambler_core::{
    CharacterSet, Phase, ScrambleConfig, ScrambleLabel, DEFAULT_TICKS_PER_CHAR,
};

use crate::theme;

const DEFAULT_TARGET: &str = "HELLO WORLD";

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// The animated label (owns timers, cancellation, displayed text)
    label: ScrambleLabel,
    /// Target text as edited by the user
    target_text: String,
    /// Index into [`CharacterSet::ALL`]
    charset_index: usize,
}

impl App {
    /// Create a new App instance
    pub fn new() -> anyhow::Result<Self> {
        let label = ScrambleLabel::new(
            ScrambleConfig::new()
                .with_final_text(DEFAULT_TARGET)
                .with_charset(CharacterSet::ALL[0]),
        )?;
        Ok(Self {
            running: true,
            label,
            target_text: DEFAULT_TARGET.to_string(),
            charset_index: 0,
        })
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut frames = self.label.subscribe();

        // Render the initial frame immediately.
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only handle Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key);
                            }
                            Event::Resize(_, _) => {}
                            _ => {}
                        }
                    }
                }

                // The label published a new frame; just re-render.
                changed = frames.changed() => {
                    if changed.is_err() {
                        self.running = false;
                    }
                }
            }

            self.render(terminal)?;
        }

        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.running = false;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('f')) => {
                self.label.loop_forever();
            }
            (_, KeyCode::Enter) => {
                if let Err(error) = self.label.settle_and_reveal(DEFAULT_TICKS_PER_CHAR) {
                    tracing::warn!(%error, "settle rejected");
                }
            }
            (_, KeyCode::Esc) => {
                self.label.stop();
            }
            (_, KeyCode::Tab) => {
                self.charset_index = (self.charset_index + 1) % CharacterSet::ALL.len();
                self.label.set_charset(self.charset());
            }
            (_, KeyCode::Backspace) => {
                self.target_text.pop();
                self.label.set_final_text(self.target_text.clone());
            }
            (_, KeyCode::Char(c)) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.target_text.push(c);
                self.label.set_final_text(self.target_text.clone());
            }
            _ => {}
        }
    }

    /// The character set currently selected
    pub fn charset(&self) -> CharacterSet {
        CharacterSet::ALL[self.charset_index]
    }

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The target text as edited so far
    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    /// Access to the underlying label (tests)
    #[cfg(test)]
    pub fn label(&self) -> &ScrambleLabel {
        &self.label
    }

    /// Render one frame
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let displayed = self.label.displayed();
        let phase = self.label.phase();
        let revealed = revealed_chars(phase, displayed.chars().count());
        let target = self.target_text.clone();
        let status = self.status_line(phase);

        terminal.draw(|frame| {
            let [stage, input, status_bar] = Layout::vertical([
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            // Animated text, vertically centered in the stage.
            let settled: String = displayed.chars().take(revealed).collect();
            let scrambling: String = displayed.chars().skip(revealed).collect();
            let line = Line::from(vec![
                Span::styled(
                    settled,
                    Style::default()
                        .fg(theme::SETTLED)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(scrambling, Style::default().fg(theme::SCRAMBLING)),
            ]);
            if stage.height > 0 {
                let text_row = Rect::new(stage.x, stage.y + stage.height / 2, stage.width, 1);
                frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), text_row);
            }

            // Target text input.
            frame.render_widget(
                Paragraph::new(target.as_str())
                    .style(Style::default().fg(theme::INPUT))
                    .block(
                        Block::bordered()
                            .title(" Target text ")
                            .border_style(Style::default().fg(theme::INPUT_BORDER)),
                    ),
                input,
            );
            let cursor_x = input.x + 1 + target.as_str().width() as u16;
            if input.height >= 3 && cursor_x < input.x + input.width.saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, input.y + 1));
            }

            // Status bar.
            frame.render_widget(Paragraph::new(status), status_bar);
        })?;
        Ok(())
    }

    fn status_line(&self, phase: Phase) -> Line<'static> {
        let mode = match phase {
            Phase::Idle => "idle",
            Phase::Settling { .. } => "settling",
            Phase::Looping => "looping",
        };
        let accent = Style::default().fg(theme::STATUS_ACCENT);
        let dim = Style::default().fg(theme::STATUS);
        Line::from(vec![
            Span::styled(format!(" {mode} "), accent.add_modifier(Modifier::BOLD)),
            Span::styled("| chars ", dim),
            Span::styled(self.charset().label().to_string(), accent),
            Span::styled(
                "  enter: settle  ctrl-f: loop  esc: stop  tab: chars  ctrl-c: quit",
                dim,
            ),
        ])
    }
}

/// How many leading characters of the displayed text are already final.
fn revealed_chars(phase: Phase, total: usize) -> usize {
    match phase {
        // Idle shows whatever settled last; treat it all as final.
        Phase::Idle => total,
        Phase::Looping => 0,
        Phase::Settling {
            ticks_elapsed,
            ticks_per_char,
        } => ((ticks_elapsed / ticks_per_char) as usize).min(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_edits_the_target_text() {
        let mut app = App::new().unwrap();
        app.handle_key(key(KeyCode::Char('!')));
        assert_eq!(app.target_text(), "HELLO WORLD!");
        assert_eq!(app.label().config().final_text, "HELLO WORLD!");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.target_text(), "HELLO WORLD");
        assert_eq!(app.label().config().final_text, "HELLO WORLD");
    }

    #[test]
    fn test_tab_cycles_through_all_charsets() {
        let mut app = App::new().unwrap();
        assert_eq!(app.charset(), CharacterSet::MixedAlphanumeric);
        let mut seen = vec![app.charset()];
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab));
            seen.push(app.charset());
            assert_eq!(app.label().config().charset, app.charset());
        }
        seen.sort_by_key(|c| format!("{c:?}"));
        seen.dedup();
        assert_eq!(seen.len(), 4);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.charset(), CharacterSet::MixedAlphanumeric);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new().unwrap();
        assert!(app.is_running());
        app.handle_key(ctrl('c'));
        assert!(!app.is_running());
    }

    #[tokio::test]
    async fn test_mode_keys_drive_the_label() {
        let mut app = App::new().unwrap();
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.label().phase(), Phase::Settling { .. }));

        app.handle_key(ctrl('f'));
        assert_eq!(app.label().phase(), Phase::Looping);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.label().phase(), Phase::Idle);
    }

    #[test]
    fn test_revealed_chars_tracks_settle_progress() {
        assert_eq!(revealed_chars(Phase::Idle, 8), 8);
        assert_eq!(revealed_chars(Phase::Looping, 8), 0);
        let settling = Phase::Settling {
            ticks_elapsed: 12,
            ticks_per_char: 5,
        };
        assert_eq!(revealed_chars(settling, 8), 2);
        let done_soon = Phase::Settling {
            ticks_elapsed: 500,
            ticks_per_char: 5,
        };
        assert_eq!(revealed_chars(done_soon, 8), 8);
    }
}
