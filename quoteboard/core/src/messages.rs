//! Board Messages
//!
//! Messages sent from the board to UI surfaces. The board is the "brain"
//! that owns every piece of state; surfaces are pure renderers that
//! display what the board tells them to. This separation keeps the core
//! free of UI dependencies and lets the same board drive a TUI, a GUI, or
//! run headless under test.

use serde::{Deserialize, Serialize};

/// Sentinel text shown when the quote fetch fails.
pub const FETCH_FAILED_TEXT: &str = "Failed to fetch quotes. Please try again.";

/// Sentinel text shown when a find matches nothing.
pub const NO_MATCH_TEXT: &str = "No matching quotes found.";

/// The quote currently on display.
///
/// Sentinel outcomes are modeled as distinct variants rather than magic
/// strings so downstream code can tell a real quote from a fallback, but
/// [`ActiveQuote::text`] always yields exactly the user-visible string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveQuote {
    /// A real quote from the source.
    Quote(String),
    /// Find ran against an empty filtered list.
    NoMatch,
    /// The fetch failed; the lists are empty.
    FetchFailed,
}

impl ActiveQuote {
    /// The text a surface should display (and the reveal should type).
    pub fn text(&self) -> &str {
        match self {
            Self::Quote(text) => text,
            Self::NoMatch => NO_MATCH_TEXT,
            Self::FetchFailed => FETCH_FAILED_TEXT,
        }
    }

    /// Whether this is a fallback message rather than a real quote.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Quote(_))
    }
}

/// Coarse board lifecycle state, mainly for status display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    /// Constructed, first fetch not yet triggered.
    #[default]
    Starting,
    /// A fetch is in flight.
    Loading,
    /// A quote is being typed out.
    Revealing,
    /// Fully revealed, waiting for user input.
    Idle,
}

impl BoardState {
    /// Human-readable description for status bars.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Starting => "Warming up...",
            Self::Loading => "Fetching quotes...",
            Self::Revealing => "Speaking...",
            Self::Idle => "Ready",
        }
    }
}

/// Messages from the board to a UI surface.
///
/// Surfaces should hold no business logic - just render what they're told.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BoardMessage {
    /// The quote list was replaced after a successful fetch.
    QuotesLoaded {
        /// Number of quotes now held.
        count: usize,
    },

    /// The fetch failed; lists were emptied and the sentinel installed.
    FetchFailed {
        /// Error description, for the log line a surface may show.
        error: String,
    },

    /// The active quote changed (fetch, find, or sentinel).
    ActiveChanged {
        /// The new active quote.
        quote: ActiveQuote,
    },

    /// One typewriter tick landed.
    RevealTick {
        /// The revealed prefix after this tick.
        revealed: String,
        /// Avatar mouth flag after this tick.
        mouth_open: bool,
    },

    /// The reveal reached the end of the active quote.
    RevealDone {
        /// The full text now on display.
        text: String,
    },

    /// The loading flag changed; surfaces should gate Refresh/Find on it.
    Loading {
        /// Whether a fetch is in flight.
        loading: bool,
    },

    /// The filtered list was recomputed.
    FilterChanged {
        /// The search term the filter was computed from.
        term: String,
        /// Number of matching quotes.
        matches: usize,
    },

    /// The search panel was toggled.
    SearchOpen {
        /// Whether the search input should be shown.
        open: bool,
    },

    /// Board lifecycle state change.
    State {
        /// The new state.
        state: BoardState,
    },

    /// The user asked to quit; the surface should tear down.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_text_matches_displayed_strings() {
        assert_eq!(
            ActiveQuote::FetchFailed.text(),
            "Failed to fetch quotes. Please try again."
        );
        assert_eq!(ActiveQuote::NoMatch.text(), "No matching quotes found.");
    }

    #[test]
    fn real_quotes_are_not_sentinels() {
        assert!(!ActiveQuote::Quote("I am a creative".into()).is_sentinel());
        assert!(ActiveQuote::NoMatch.is_sentinel());
        assert!(ActiveQuote::FetchFailed.is_sentinel());
    }

    #[test]
    fn state_descriptions_are_stable() {
        assert_eq!(BoardState::Loading.description(), "Fetching quotes...");
        assert_eq!(BoardState::Idle.description(), "Ready");
    }
}
