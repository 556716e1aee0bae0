//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize)
//! - BoardClient for the embedded board
//! - DisplayState for rendering
//!
//! The App converts terminal events to `BoardEvent`s, drains
//! `BoardMessage`s into the display state each frame, and renders from
//! display state only. Every frame also drives the board's fetch poll
//! and typewriter tick, so the board never needs its own timer task.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Terminal;

use quoteboard_core::{load_config, AudioCue, NullCue};

use crate::audio::TypingCue;
use crate::avatar::Avatar;
use crate::board_client::BoardClient;
use crate::display::DisplayState;
use crate::theme;
use crate::widgets::QuoteCard;

/// Card title, matching the page the board renders.
const CARD_TITLE: &str = "Kanye West Quotes";

/// Card subtitle.
const CARD_SUBTITLE: &str = "Wisdom from Ye";

/// Widest the quote card will grow.
const CARD_MAX_WIDTH: u16 = 60;

/// Tallest the quote card will grow.
const CARD_MAX_HEIGHT: u16 = 14;

/// Height of the search row when open (bordered input).
const SEARCH_HEIGHT: u16 = 3;

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Client for communicating with the embedded board
    client: BoardClient,
    /// Display state derived from board messages
    display: DisplayState,
    /// The portrait renderer (display only)
    avatar: Avatar,
    /// Whether the portrait overlay is shown
    avatar_visible: bool,
    /// Search input buffer (owned by the UI, echoed to the board)
    input_buffer: String,
    /// Last frame time (for animations)
    last_frame: Instant,
}

impl App {
    /// Create a new App instance: load configuration, open the audio
    /// cue (downgrading to silence when no device exists), embed a board.
    pub async fn new() -> anyhow::Result<Self> {
        let config = load_config().await?;

        let cue: Box<dyn AudioCue> = match TypingCue::load(&config.audio_asset).await {
            Ok(cue) => Box::new(cue),
            Err(error) => {
                tracing::warn!(%error, "no audio output, typing cue disabled");
                Box::new(NullCue::new())
            }
        };

        Ok(Self {
            running: true,
            client: BoardClient::new(config, cue),
            display: DisplayState::new(),
            avatar: Avatar::new(),
            avatar_visible: true,
            input_buffer: String::new(),
            last_frame: Instant::now(),
        })
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // ~30 FPS: comfortably above the 50ms reveal tick.
        let frame_duration = Duration::from_millis(33);

        // Create async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        self.render(terminal)?;

        // Kick off the automatic initial fetch
        self.client.start().await;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only handle Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key).await;
                            }
                            _ => {}
                        }
                    }
                }

                // Frame tick
                _ = tokio::time::sleep(Duration::from_millis(16)) => {}
            }

            // Poll the in-flight fetch
            self.client.poll_fetch().await;

            // Advance the typewriter
            self.client.tick().await;

            // Drain board messages into display state
            self.process_messages();

            // Update animations
            self.update();

            // Render
            self.render(terminal)?;

            if self.display.quitting {
                self.running = false;
            }

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                tokio::time::sleep(frame_duration - elapsed).await;
            }
        }

        Ok(())
    }

    /// Drain all pending messages from the board
    fn process_messages(&mut self) {
        for msg in self.client.recv_all() {
            self.display.apply_message(msg);
        }
    }

    /// Handle keyboard input
    async fn handle_key(&mut self, key: event::KeyEvent) {
        // Ctrl-C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.client.request_quit().await;
            self.running = false;
            return;
        }

        if self.display.search_open {
            self.handle_search_key(key).await;
        } else {
            self.handle_board_key(key).await;
        }
    }

    /// Keys while the search input is open: edit the term, find, close.
    async fn handle_search_key(&mut self, key: event::KeyEvent) {
        match key.code {
            // Closing the panel clears the term board-side
            KeyCode::Esc => {
                self.input_buffer.clear();
                self.client.toggle_search().await;
            }

            KeyCode::Enter => {
                self.client.find().await;
            }

            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                self.client.search_changed(self.input_buffer.clone()).await;
            }

            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.client.search_changed(self.input_buffer.clone()).await;
            }

            _ => {}
        }
    }

    /// Keys while the search input is closed: board shortcuts.
    async fn handle_board_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.client.request_quit().await;
                self.running = false;
            }

            KeyCode::Char('r') => {
                if !self.display.loading {
                    self.client.refresh().await;
                }
            }

            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.input_buffer.clear();
                self.client.toggle_search().await;
            }

            KeyCode::Char('a') => {
                self.avatar_visible = !self.avatar_visible;
            }

            _ => {}
        }
    }

    /// Update animations and sync the portrait from display state
    fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;

        self.avatar.update(delta);
        self.avatar.set_mouth(self.display.mouth_open);
    }

    /// Render the UI
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            let search_height = if self.display.search_open {
                SEARCH_HEIGHT
            } else {
                0
            };
            let status_y = area.height.saturating_sub(1);
            let content_height = area.height.saturating_sub(search_height + 1);

            let card = centered_card(Rect::new(0, 0, area.width, content_height));
            Self::render_card(&self.display, card, buf);

            if self.display.search_open {
                let search = Rect::new(0, content_height, area.width, search_height);
                Self::render_search(&self.display, &self.input_buffer, search, buf);
            }

            let status = Rect::new(0, status_y, area.width, 1);
            Self::render_status(&self.display, status, buf);

            if self.avatar_visible {
                let overlay = avatar_overlay(card, area, self.avatar.bounds());
                self.avatar.render(overlay, buf);
            }
        })?;

        Ok(())
    }

    /// Render the quote card
    fn render_card(display: &DisplayState, card: Rect, buf: &mut ratatui::buffer::Buffer) {
        use ratatui::widgets::Widget;

        QuoteCard::new(CARD_TITLE, CARD_SUBTITLE, &display.revealed)
            .sentinel(display.showing_sentinel())
            .render(card, buf);
    }

    /// Render the search input row
    fn render_search(
        display: &DisplayState,
        input: &str,
        area: Rect,
        buf: &mut ratatui::buffer::Buffer,
    ) {
        use ratatui::widgets::{Block, Borders, Widget};
        use unicode_width::UnicodeWidthStr;

        let hint = if display.can_find() {
            format!(" [Enter] Find - {} matches ", display.filter_matches)
        } else if display.loading {
            " loading... ".to_string()
        } else {
            " no matches ".to_string()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::DIM_GRAY))
            .title(" Filter quotes ")
            .title_bottom(hint);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 1 {
            return;
        }

        // Keep the cursor in view on long terms.
        let budget = inner.width.saturating_sub(2) as usize;
        let mut visible = input;
        while visible.width() > budget {
            let mut chars = visible.chars();
            chars.next();
            visible = chars.as_str();
        }

        let text = format!("{visible}_");
        buf.set_string(
            inner.x + 1,
            inner.y,
            text,
            Style::default().fg(theme::SEARCH_GREEN),
        );
    }

    /// Render the status bar
    fn render_status(display: &DisplayState, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = if display.loading {
            Style::default().fg(theme::LOADING_YELLOW)
        } else if display.last_error.is_some() {
            Style::default().fg(theme::ERROR_RED)
        } else {
            Style::default().fg(theme::DIM_GRAY)
        };

        let error_note = display
            .last_error
            .as_deref()
            .map(|e| format!(" | {e}"))
            .unwrap_or_default();

        let status = format!(
            " {} | {} quotes | [r] {} | [/] search | [a] avatar | Esc quit{}",
            display.board_state.description(),
            display.quote_count,
            display.refresh_label(),
            error_note,
        );

        buf.set_string(area.x, area.y, status, style);
    }
}

/// Clamp the quote card into the middle of the content area.
fn centered_card(content: Rect) -> Rect {
    let width = content.width.min(CARD_MAX_WIDTH).max(20);
    let height = content.height.min(CARD_MAX_HEIGHT).max(6);
    let x = content.x + (content.width.saturating_sub(width)) / 2;
    let y = content.y + (content.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(content.width), height.min(content.height))
}

/// Place the portrait overlapping the card's top-right corner, the way
/// the original peeks out from behind the card.
fn avatar_overlay(card: Rect, screen: Rect, bounds: (u16, u16)) -> Rect {
    let (w, h) = bounds;
    let x = (card.x + card.width)
        .saturating_sub(w / 2)
        .min(screen.width.saturating_sub(w));
    let y = card.y.saturating_sub(h / 2);
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_centered_and_clamped() {
        let card = centered_card(Rect::new(0, 0, 120, 40));
        assert_eq!(card.width, CARD_MAX_WIDTH);
        assert_eq!(card.x, 30);

        let tiny = centered_card(Rect::new(0, 0, 24, 8));
        assert!(tiny.width <= 24);
        assert!(tiny.height <= 8);
    }

    #[test]
    fn avatar_overlay_stays_on_screen() {
        let screen = Rect::new(0, 0, 80, 24);
        let card = centered_card(screen);
        let overlay = avatar_overlay(card, screen, (12, 7));
        assert!(overlay.x + overlay.width <= screen.width);
    }
}
