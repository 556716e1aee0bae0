//! QuoteBoard TUI - Terminal interface for the quote board
//!
//! This crate provides a full-screen terminal UI: a quote card with a
//! typewriter reveal, a collapsible search panel, and a two-pose
//! talking portrait synced to the reveal ticks.
//!
//! # Architecture
//!
//! - **App**: event loop bridging terminal events and board messages
//! - **Avatar**: blocky pixel-art portrait keyed by the mouth flag
//! - **Widgets**: the bordered quote card
//! - **Audio**: rodio-backed looping typing cue

pub mod app;
pub mod audio;
pub mod avatar;
pub mod board_client;
pub mod display;
pub mod theme;
pub mod widgets;

pub use app::App;
