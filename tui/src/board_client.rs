//! Board Client
//!
//! Thin wrapper around the board for TUI integration. The client embeds
//! the board directly (no network between them) and provides a
//! convenient interface for sending events and receiving messages.
//!
//! # Architecture
//!
//! The TUI is a "thin client" - it doesn't contain any business logic.
//! Everything happens in the board. The TUI's job is:
//! 1. Convert terminal events to `BoardEvent`s
//! 2. Send `BoardEvent`s to the board
//! 3. Receive `BoardMessage`s
//! 4. Render display state based on messages

use tokio::sync::mpsc;

use quoteboard_core::{
    AudioCue, BoardConfig, BoardEvent, BoardMessage, KanyeRestSource, QuoteBoard,
};

/// Client for communicating with the embedded board.
pub struct BoardClient {
    /// The embedded board instance
    board: QuoteBoard<KanyeRestSource>,
    /// Receiver for messages from the board
    rx: mpsc::Receiver<BoardMessage>,
}

impl BoardClient {
    /// Create a client with an embedded board talking to the configured
    /// HTTP endpoint, using `cue` for the typing sound.
    pub fn new(config: BoardConfig, cue: Box<dyn AudioCue>) -> Self {
        let (tx, rx) = mpsc::channel(100);
        let source = KanyeRestSource::from_config(&config);
        let board = QuoteBoard::new(source, cue, config, tx);
        Self { board, rx }
    }

    /// Start the board (kicks off the automatic initial fetch).
    pub async fn start(&mut self) {
        self.board.start().await;
    }

    /// Ask for a fresh quote list.
    pub async fn refresh(&mut self) {
        self.board.handle_event(BoardEvent::RefreshRequested).await;
    }

    /// Ask for a random quote from the filtered list.
    pub async fn find(&mut self) {
        self.board.handle_event(BoardEvent::FindRequested).await;
    }

    /// Toggle the search panel.
    pub async fn toggle_search(&mut self) {
        self.board.handle_event(BoardEvent::SearchToggled).await;
    }

    /// Report a changed search term.
    pub async fn search_changed(&mut self, term: String) {
        self.board
            .handle_event(BoardEvent::SearchChanged { term })
            .await;
    }

    /// Ask the board to quit.
    pub async fn request_quit(&mut self) {
        self.board.handle_event(BoardEvent::QuitRequested).await;
    }

    /// Poll the in-flight fetch (must be called regularly).
    pub async fn poll_fetch(&mut self) {
        self.board.poll_fetch().await;
    }

    /// Advance the typewriter (must be called regularly).
    pub async fn tick(&mut self) {
        self.board.tick().await;
    }

    /// Receive all pending messages from the board (non-blocking).
    pub fn recv_all(&mut self) -> Vec<BoardMessage> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.board.is_loading()
    }
}
