//! Theme and Colors
//!
//! The board's palette - designed around the blocky pixel-art portrait
//! and a dark card layout. Portrait tones are warm browns with a black
//! shade bar; UI accents lean magenta like the original gradient backdrop.

use ratatui::style::Color;

// ============================================================================
// Portrait Palette
// ============================================================================

/// Skin - warm brown (main tone)
pub const FACE_SKIN: Color = Color::Rgb(166, 116, 82);

/// Skin shadow - darker for the jawline
pub const FACE_SKIN_SHADOW: Color = Color::Rgb(128, 86, 58);

/// Hair - near-black
pub const FACE_HAIR: Color = Color::Rgb(28, 24, 22);

/// Sunglasses band
pub const FACE_SHADES: Color = Color::Rgb(12, 12, 14);

/// Sunglasses glint - white flash
pub const FACE_SHADES_GLINT: Color = Color::Rgb(235, 235, 245);

/// Closed mouth line
pub const FACE_MOUTH: Color = Color::Rgb(92, 52, 40);

/// Open mouth interior
pub const FACE_MOUTH_OPEN: Color = Color::Rgb(60, 20, 20);

/// Teeth highlight inside the open mouth
pub const FACE_TEETH: Color = Color::Rgb(240, 235, 220);

/// Jacket collar
pub const FACE_JACKET: Color = Color::Rgb(46, 42, 50);

// ============================================================================
// UI Colors
// ============================================================================

/// Signature accent (titles, the active quote)
pub const BOARD_ACCENT: Color = Color::Magenta;

/// Card border
pub const CARD_BORDER: Color = Color::Rgb(120, 80, 140);

/// Search input text
pub const SEARCH_GREEN: Color = Color::Rgb(130, 220, 130);

/// System/dim text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Error red
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Loading/progress yellow
pub const LOADING_YELLOW: Color = Color::Rgb(230, 200, 90);
