//! Sprite Definitions
//!
//! Blocky pixel art using Unicode block elements and colors.
//! Each cell has its own foreground color, which is what makes the
//! portrait read at terminal resolution.

use std::collections::HashMap;

use ratatui::style::Color;

use crate::theme;

/// A single colored cell in a sprite
#[derive(Clone, Debug)]
pub struct ColoredCell {
    /// The character to display
    pub ch: char,
    /// Foreground color
    pub fg: Color,
}

impl ColoredCell {
    /// Create a new colored cell
    pub const fn new(ch: char, fg: Color) -> Self {
        Self { ch, fg }
    }

    /// Empty/transparent cell
    pub const fn empty() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }

    /// Check if cell is empty/transparent
    pub fn is_empty(&self) -> bool {
        self.ch == ' '
    }
}

/// A single portrait pose with per-cell coloring
#[derive(Clone, Debug)]
pub struct Frame {
    /// 2D grid of colored cells (row-major)
    pub cells: Vec<Vec<ColoredCell>>,
    /// Width in terminal cells
    pub width: u16,
    /// Height in terminal cells
    pub height: u16,
}

impl Frame {
    /// Create a frame from a grid of colored cells
    pub fn new(cells: Vec<Vec<ColoredCell>>) -> Self {
        let height = cells.len() as u16;
        let width = cells.iter().map(|row| row.len() as u16).max().unwrap_or(0);

        Self {
            cells,
            width,
            height,
        }
    }
}

/// The portrait poses the board can ask for.
///
/// `Open`/`Closed` are keyed by the reveal's mouth flag; `Glint` is a
/// brief idle flourish on the shades.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pose {
    /// Mouth closed (idle / between ticks)
    Closed,
    /// Mouth open (mid-speech)
    Open,
    /// Shades catching the light
    Glint,
}

/// Parse a sprite pattern using a color map.
///
/// Each character in the pattern maps to a (display char, color) pair in
/// the palette; ' ' (space) is always transparent.
pub fn build_frame(pattern: &[&str], palette: &[(char, char, Color)]) -> Frame {
    let color_map: HashMap<char, (char, Color)> = palette
        .iter()
        .map(|&(key, ch, color)| (key, (ch, color)))
        .collect();

    let cells: Vec<Vec<ColoredCell>> = pattern
        .iter()
        .map(|line| {
            line.chars()
                .map(|c| {
                    if c == ' ' {
                        ColoredCell::empty()
                    } else if let Some(&(ch, color)) = color_map.get(&c) {
                        ColoredCell::new(ch, color)
                    } else {
                        // Unknown char - show as-is in default color
                        ColoredCell::new(c, Color::Reset)
                    }
                })
                .collect()
        })
        .collect();

    Frame::new(cells)
}

/// Shared palette for all portrait poses.
fn portrait_palette() -> Vec<(char, char, Color)> {
    vec![
        ('h', '█', theme::FACE_HAIR),
        ('s', '█', theme::FACE_SKIN),
        ('d', '█', theme::FACE_SKIN_SHADOW),
        ('G', '▬', theme::FACE_SHADES),
        ('g', '▬', theme::FACE_SHADES_GLINT),
        ('m', '▁', theme::FACE_MOUTH),
        ('O', '█', theme::FACE_MOUTH_OPEN),
        ('t', '▀', theme::FACE_TEETH),
        ('j', '█', theme::FACE_JACKET),
    ]
}

const POSE_CLOSED: &[&str] = &[
    "   hhhhhh   ",
    "  hhhhhhhh  ",
    "  sGGGGGGs  ",
    "  ssssssss  ",
    "  dssmmssd  ",
    "   dssssd   ",
    "  jjjjjjjj  ",
];

const POSE_OPEN: &[&str] = &[
    "   hhhhhh   ",
    "  hhhhhhhh  ",
    "  sGGGGGGs  ",
    "  ssssssss  ",
    "  dssttssd  ",
    "   dsOOsd   ",
    "  jjjjjjjj  ",
];

const POSE_GLINT: &[&str] = &[
    "   hhhhhh   ",
    "  hhhhhhhh  ",
    "  sGGggGGs  ",
    "  ssssssss  ",
    "  dssmmssd  ",
    "   dssssd   ",
    "  jjjjjjjj  ",
];

/// Build all portrait poses.
pub fn load_poses() -> HashMap<Pose, Frame> {
    let palette = portrait_palette();
    let mut poses = HashMap::new();
    poses.insert(Pose::Closed, build_frame(POSE_CLOSED, &palette));
    poses.insert(Pose::Open, build_frame(POSE_OPEN, &palette));
    poses.insert(Pose::Glint, build_frame(POSE_GLINT, &palette));
    poses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_share_dimensions() {
        let poses = load_poses();
        let closed = &poses[&Pose::Closed];
        let open = &poses[&Pose::Open];
        assert_eq!((closed.width, closed.height), (open.width, open.height));
        assert_eq!(closed.width, 12);
        assert_eq!(closed.height, 7);
    }

    #[test]
    fn spaces_are_transparent() {
        let poses = load_poses();
        let closed = &poses[&Pose::Closed];
        assert!(closed.cells[0][0].is_empty());
        assert!(!closed.cells[0][4].is_empty());
    }

    #[test]
    fn open_pose_differs_around_the_mouth() {
        let poses = load_poses();
        let closed = &poses[&Pose::Closed];
        let open = &poses[&Pose::Open];
        // Mouth rows (4 and 5) must differ; the shades row must not.
        assert_ne!(
            closed.cells[5].iter().map(|c| c.ch).collect::<String>(),
            open.cells[5].iter().map(|c| c.ch).collect::<String>(),
        );
        assert_eq!(
            closed.cells[2].iter().map(|c| c.ch).collect::<String>(),
            open.cells[2].iter().map(|c| c.ch).collect::<String>(),
        );
    }
}
