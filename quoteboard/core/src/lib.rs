//! QuoteBoard Core - Headless quote-board state machine
//!
//! This crate provides the full behavioral core of the quote board,
//! completely independent of any UI framework. It can drive a TUI, a
//! GUI, or run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      UI Surfaces                          │
//! │   ┌─────────┐    ┌──────────┐    ┌────────────────────┐  │
//! │   │   TUI   │    │   GUI    │    │ Headless / Tests   │  │
//! │   │(ratatui)│    │          │    │                    │  │
//! │   └────┬────┘    └────┬─────┘    └─────────┬──────────┘  │
//! │        └──────────────┴────────────────────┘             │
//! │                       │                                  │
//! │                 BoardEvent (up)                          │
//! │                BoardMessage (down)                       │
//! │                       │                                  │
//! └───────────────────────┼──────────────────────────────────┘
//!                         │
//! ┌───────────────────────┼──────────────────────────────────┐
//! │                   QUOTE BOARD                            │
//! │  ┌────────────────────┴───────────────────────────────┐  │
//! │  │  ┌─────────┐ ┌────────┐ ┌──────────┐ ┌──────────┐  │  │
//! │  │  │  Fetch  │ │ Filter │ │  Reveal  │ │  Audio   │  │  │
//! │  │  │ (HTTP)  │ │ (pure) │ │ (timer)  │ │  (cue)   │  │  │
//! │  │  └─────────┘ └────────┘ └──────────┘ └──────────┘  │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`QuoteBoard`]: owns all state and handles every user action
//! - [`BoardEvent`]: events sent from UI surfaces to the board
//! - [`BoardMessage`]: messages sent from the board to UI surfaces
//! - [`QuoteSource`]: async quote provider trait ([`KanyeRestSource`]
//!   is the HTTP implementation)
//! - [`AudioCue`]: loop-playable typing sound, owned by the reveal
//! - [`RevealCycle`]: the typewriter state machine
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any
//! audio library. It's pure behavior that can be embedded anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod board;
pub mod config;
pub mod events;
pub mod filter;
pub mod messages;
pub mod reveal;
pub mod source;

// Re-exports for convenience
pub use audio::{AudioCue, NullCue};
pub use board::QuoteBoard;
pub use config::{
    default_config_path, load_config, load_config_from_path, BoardConfig, BoardToml, ConfigError,
};
pub use events::BoardEvent;
pub use filter::filter_quotes;
pub use messages::{
    ActiveQuote, BoardMessage, BoardState, FETCH_FAILED_TEXT, NO_MATCH_TEXT,
};
pub use reveal::{playback_rate, RevealCycle, RevealPhase, RevealTick};
pub use source::{KanyeRestSource, QuoteSource, SourceError};
