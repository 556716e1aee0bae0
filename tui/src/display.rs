//! Display State
//!
//! Types that represent the current display state for the TUI, derived
//! from `BoardMessage`s.
//!
//! # Design Philosophy
//!
//! The TUI is a "thin client" - it just renders what the board tells it
//! to. Display state is the bridge between board messages and rendering;
//! it holds no business logic and makes no decisions beyond bookkeeping.

use quoteboard_core::{ActiveQuote, BoardMessage, BoardState};

/// Everything the renderer needs to draw a frame.
#[derive(Clone, Debug)]
pub struct DisplayState {
    /// The revealed prefix of the active quote.
    pub revealed: String,
    /// The active quote itself (for sentinel styling).
    pub active: Option<ActiveQuote>,
    /// Avatar mouth flag from the latest reveal tick.
    pub mouth_open: bool,
    /// Whether a fetch is in flight (gates Refresh/Find affordances).
    pub loading: bool,
    /// Whether the search input is shown.
    pub search_open: bool,
    /// The search term the current filter was computed from.
    pub filter_term: String,
    /// Number of quotes matching the filter.
    pub filter_matches: usize,
    /// Total quotes held by the board.
    pub quote_count: usize,
    /// Board lifecycle state, for the status bar.
    pub board_state: BoardState,
    /// Last fetch error, if the most recent fetch failed.
    pub last_error: Option<String>,
    /// The board acknowledged a quit request.
    pub quitting: bool,
}

impl DisplayState {
    /// Fresh display state before the first message arrives.
    pub fn new() -> Self {
        Self {
            revealed: String::new(),
            active: None,
            mouth_open: false,
            loading: false,
            search_open: false,
            filter_term: String::new(),
            filter_matches: 0,
            quote_count: 0,
            board_state: BoardState::Starting,
            last_error: None,
            quitting: false,
        }
    }

    /// Fold one board message into the display state.
    pub fn apply_message(&mut self, msg: BoardMessage) {
        match msg {
            BoardMessage::QuotesLoaded { count } => {
                self.quote_count = count;
                self.last_error = None;
            }
            BoardMessage::FetchFailed { error } => {
                self.quote_count = 0;
                self.last_error = Some(error);
            }
            BoardMessage::ActiveChanged { quote } => {
                self.active = Some(quote);
                self.revealed.clear();
                self.mouth_open = false;
            }
            BoardMessage::RevealTick {
                revealed,
                mouth_open,
            } => {
                self.revealed = revealed;
                self.mouth_open = mouth_open;
            }
            BoardMessage::RevealDone { text } => {
                self.revealed = text;
                self.mouth_open = false;
            }
            BoardMessage::Loading { loading } => {
                self.loading = loading;
            }
            BoardMessage::FilterChanged { term, matches } => {
                self.filter_term = term;
                self.filter_matches = matches;
            }
            BoardMessage::SearchOpen { open } => {
                self.search_open = open;
            }
            BoardMessage::State { state } => {
                self.board_state = state;
            }
            BoardMessage::Quit => {
                self.quitting = true;
            }
        }
    }

    /// Whether the Find affordance should be offered.
    ///
    /// Mirrors the loading/empty gating of the original controls.
    pub fn can_find(&self) -> bool {
        !self.loading && self.filter_matches > 0
    }

    /// Whether the active quote is a fallback message.
    pub fn showing_sentinel(&self) -> bool {
        self.active.as_ref().is_some_and(ActiveQuote::is_sentinel)
    }

    /// Label for the Refresh affordance.
    pub fn refresh_label(&self) -> &'static str {
        if self.loading {
            "Loading..."
        } else {
            "Refresh Quotes"
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_change_resets_the_reveal() {
        let mut display = DisplayState::new();
        display.apply_message(BoardMessage::RevealTick {
            revealed: "par".to_string(),
            mouth_open: true,
        });
        assert_eq!(display.revealed, "par");
        assert!(display.mouth_open);

        display.apply_message(BoardMessage::ActiveChanged {
            quote: ActiveQuote::Quote("next".to_string()),
        });
        assert_eq!(display.revealed, "");
        assert!(!display.mouth_open);
    }

    #[test]
    fn fetch_failure_records_the_error() {
        let mut display = DisplayState::new();
        display.apply_message(BoardMessage::QuotesLoaded { count: 5 });
        assert_eq!(display.quote_count, 5);

        display.apply_message(BoardMessage::FetchFailed {
            error: "boom".to_string(),
        });
        assert_eq!(display.quote_count, 0);
        assert_eq!(display.last_error.as_deref(), Some("boom"));
    }

    #[test]
    fn find_gating_follows_loading_and_matches() {
        let mut display = DisplayState::new();
        display.apply_message(BoardMessage::FilterChanged {
            term: "a".to_string(),
            matches: 2,
        });
        assert!(display.can_find());

        display.apply_message(BoardMessage::Loading { loading: true });
        assert!(!display.can_find());
        assert_eq!(display.refresh_label(), "Loading...");

        display.apply_message(BoardMessage::Loading { loading: false });
        display.apply_message(BoardMessage::FilterChanged {
            term: "zzz".to_string(),
            matches: 0,
        });
        assert!(!display.can_find());
    }

    #[test]
    fn sentinel_detection_follows_the_active_quote() {
        let mut display = DisplayState::new();
        assert!(!display.showing_sentinel());

        display.apply_message(BoardMessage::ActiveChanged {
            quote: ActiveQuote::FetchFailed,
        });
        assert!(display.showing_sentinel());

        display.apply_message(BoardMessage::ActiveChanged {
            quote: ActiveQuote::Quote("real".to_string()),
        });
        assert!(!display.showing_sentinel());
    }
}
