//! The Quote Board
//!
//! Owns every piece of session state: the quote list, the derived
//! filtered list, the search term and panel flag, the loading flag, the
//! active quote and its reveal cycle. Surfaces send [`BoardEvent`]s in
//! and receive [`BoardMessage`]s out; nothing else crosses the boundary.
//!
//! # Concurrency model
//!
//! Single logical thread of control. Event handlers run as non-overlapping
//! turns on the surface's loop; the only asynchronous operation is the
//! quote fetch, which runs on a spawned task and delivers its outcome
//! through a oneshot channel polled once per frame. The reveal uses a
//! cooperative `Instant`-based tick, not a blocking sleep. Correctness
//! relies on always cancelling the previous reveal before starting the
//! next one, never on locks.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tokio::sync::{mpsc, oneshot};

use crate::audio::AudioCue;
use crate::config::BoardConfig;
use crate::events::BoardEvent;
use crate::filter::filter_quotes;
use crate::messages::{ActiveQuote, BoardMessage, BoardState};
use crate::reveal::{RevealCycle, RevealPhase};
use crate::source::{QuoteSource, SourceError};

/// The headless quote board.
pub struct QuoteBoard<S: QuoteSource + 'static> {
    /// Quote provider, shared with spawned fetch tasks.
    source: Arc<S>,
    /// Resolved configuration.
    config: BoardConfig,
    /// Channel to the surface.
    tx: mpsc::Sender<BoardMessage>,
    /// The full quote list, replaced wholesale on every fetch.
    quotes: Vec<String>,
    /// Derived: quotes containing the search term.
    filtered: Vec<String>,
    /// Current search term (empty unless the panel has input).
    search_term: String,
    /// Whether the search panel is open.
    search_open: bool,
    /// The quote (or sentinel) currently on display.
    active: Option<ActiveQuote>,
    /// True while a fetch is in flight.
    loading: bool,
    /// The typewriter cycle; owns the audio cue.
    reveal: RevealCycle,
    /// Pending fetch outcome, if a fetch is in flight.
    fetch_rx: Option<oneshot::Receiver<Result<Vec<String>, SourceError>>>,
    /// Coarse lifecycle state.
    state: BoardState,
}

impl<S: QuoteSource + 'static> QuoteBoard<S> {
    /// Create a board. `cue` is handed to the reveal cycle and never
    /// touched by anything else.
    pub fn new(
        source: S,
        cue: Box<dyn AudioCue>,
        config: BoardConfig,
        tx: mpsc::Sender<BoardMessage>,
    ) -> Self {
        let reveal = RevealCycle::new(cue, config.reveal_interval);
        Self {
            source: Arc::new(source),
            config,
            tx,
            quotes: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            search_open: false,
            active: None,
            loading: false,
            reveal,
            fetch_rx: None,
            state: BoardState::Starting,
        }
    }

    /// Kick off the automatic initial fetch.
    pub async fn start(&mut self) {
        tracing::info!(source = self.source.name(), "board starting");
        self.refresh().await;
    }

    /// Handle one user action.
    pub async fn handle_event(&mut self, event: BoardEvent) {
        // Surfaces gate Refresh/Find on the loading flag; the board stays
        // permissive so a trigger that slips through still behaves sanely
        // (a newer fetch supersedes, a find falls back to the sentinel).
        match event {
            BoardEvent::RefreshRequested => self.refresh().await,
            BoardEvent::FindRequested => self.find().await,
            BoardEvent::SearchToggled => self.toggle_search().await,
            BoardEvent::SearchChanged { term } => self.set_search_term(term).await,
            BoardEvent::QuitRequested => self.send(BoardMessage::Quit).await,
        }
    }

    /// Poll the in-flight fetch, applying its outcome if it completed.
    /// Call once per surface frame.
    pub async fn poll_fetch(&mut self) {
        let Some(rx) = self.fetch_rx.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.fetch_rx = None;
                self.apply_fetch(outcome).await;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                self.fetch_rx = None;
                self.apply_fetch(Err(SourceError::TaskFailed)).await;
            }
        }
    }

    /// Advance the typewriter. Call once per surface frame.
    pub async fn tick(&mut self) {
        if let Some(tick) = self.reveal.tick() {
            let finished = tick.finished;
            self.send(BoardMessage::RevealTick {
                revealed: tick.revealed,
                mouth_open: tick.mouth_open,
            })
            .await;

            if finished {
                self.send(BoardMessage::RevealDone {
                    text: self.reveal.revealed_text(),
                })
                .await;
                self.set_state(BoardState::Idle).await;
            }
        }
    }

    /// Begin a fetch: raise the loading flag and hand the network call to
    /// a spawned task. The outcome comes back through `poll_fetch`.
    async fn refresh(&mut self) {
        if self.fetch_rx.is_some() {
            tracing::debug!("superseding an unfinished fetch");
        }

        self.loading = true;
        self.send(BoardMessage::Loading { loading: true }).await;
        self.set_state(BoardState::Loading).await;

        let source = Arc::clone(&self.source);
        let (tx, rx) = oneshot::channel();
        self.fetch_rx = Some(rx);

        tokio::spawn(async move {
            let outcome = source.fetch_quotes().await;
            // The board may have been superseded or torn down; that drop
            // is the cancellation path, so a failed send is fine.
            let _ = tx.send(outcome);
        });
    }

    /// Apply a fetch outcome. The loading flag is released on every exit
    /// path, success or failure.
    async fn apply_fetch(&mut self, outcome: Result<Vec<String>, SourceError>) {
        match outcome {
            Ok(quotes) => {
                tracing::info!(count = quotes.len(), "quote list replaced");
                self.quotes = quotes;
                self.recompute_filter().await;
                self.send(BoardMessage::QuotesLoaded {
                    count: self.quotes.len(),
                })
                .await;

                let picked = self
                    .quotes
                    .choose(&mut rand::thread_rng())
                    .cloned()
                    .unwrap_or_default();
                self.set_active(ActiveQuote::Quote(picked)).await;
            }
            Err(error) => {
                tracing::warn!(%error, "quote fetch failed");
                self.quotes.clear();
                self.filtered.clear();
                self.send(BoardMessage::FetchFailed {
                    error: error.to_string(),
                })
                .await;
                self.set_active(ActiveQuote::FetchFailed).await;
            }
        }

        self.loading = false;
        self.send(BoardMessage::Loading { loading: false }).await;
    }

    /// Pick a uniformly random quote from the filtered list, or the
    /// no-match sentinel if it is empty.
    async fn find(&mut self) {
        let picked = match self.filtered.choose(&mut rand::thread_rng()) {
            Some(quote) => ActiveQuote::Quote(quote.clone()),
            None => ActiveQuote::NoMatch,
        };
        self.set_active(picked).await;
    }

    /// Flip the search panel. Closing clears the term, which cascades
    /// into a filter recompute back to the full list.
    async fn toggle_search(&mut self) {
        self.search_open = !self.search_open;
        if !self.search_open && !self.search_term.is_empty() {
            self.search_term.clear();
            self.recompute_filter().await;
        }
        self.send(BoardMessage::SearchOpen {
            open: self.search_open,
        })
        .await;
    }

    /// Replace the search term and rederive the filtered list.
    async fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.recompute_filter().await;
    }

    /// Install a new active quote and restart the reveal for it.
    ///
    /// The reveal's `start` cancels the previous cycle (tick schedule and
    /// audio) before anything else, so no stale tick can land on the new
    /// quote's text.
    async fn set_active(&mut self, quote: ActiveQuote) {
        self.send(BoardMessage::ActiveChanged {
            quote: quote.clone(),
        })
        .await;
        self.reveal.start(quote.text());
        self.active = Some(quote);

        if self.reveal.phase() == RevealPhase::Revealing {
            self.set_state(BoardState::Revealing).await;
        } else {
            // Empty text (a fetch can legally return an empty list).
            self.send(BoardMessage::RevealDone {
                text: String::new(),
            })
            .await;
            self.set_state(BoardState::Idle).await;
        }
    }

    /// Explicit derivation step: filtered list from quotes + term.
    async fn recompute_filter(&mut self) {
        self.filtered = filter_quotes(&self.quotes, &self.search_term);
        self.send(BoardMessage::FilterChanged {
            term: self.search_term.clone(),
            matches: self.filtered.len(),
        })
        .await;
    }

    async fn set_state(&mut self, state: BoardState) {
        if self.state != state {
            self.state = state;
            self.send(BoardMessage::State { state }).await;
        }
    }

    async fn send(&self, msg: BoardMessage) {
        if self.tx.send(msg).await.is_err() {
            tracing::debug!("surface receiver dropped, message discarded");
        }
    }

    // === Accessors (used by surfaces and tests) ===

    /// The full quote list.
    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    /// The derived filtered list.
    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Whether the search panel is open.
    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The active quote, if one has been chosen.
    pub fn active(&self) -> Option<&ActiveQuote> {
        self.active.as_ref()
    }

    /// The revealed prefix of the active quote.
    pub fn revealed_text(&self) -> String {
        self.reveal.revealed_text()
    }

    /// Phase of the reveal cycle.
    pub fn reveal_phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    /// Coarse lifecycle state.
    pub fn state(&self) -> BoardState {
        self.state
    }

    /// Resolved configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
}
