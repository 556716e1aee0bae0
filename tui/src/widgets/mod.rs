//! Custom Widgets

mod quote_card;

pub use quote_card::QuoteCard;
