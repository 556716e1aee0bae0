//! Portrait Avatar
//!
//! The talking-head portrait that accompanies the typewriter reveal. It
//! has exactly two speech poses - mouth open and mouth closed - selected
//! by the board's mouth flag on each reveal tick, plus an occasional
//! glint on the shades while idle so the portrait doesn't feel frozen.

mod sprites;

use std::collections::HashMap;
use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

pub use sprites::{build_frame, ColoredCell, Frame, Pose};

/// How long a shade glint stays on screen.
const GLINT_DURATION: Duration = Duration::from_millis(180);

/// Shortest and longest pause between glints.
const GLINT_GAP_MIN_SECS: u64 = 4;
const GLINT_GAP_MAX_SECS: u64 = 10;

/// The portrait renderer.
pub struct Avatar {
    /// All poses, built once.
    poses: HashMap<Pose, Frame>,
    /// Whether the mouth is currently open.
    mouth_open: bool,
    /// Time until the next glint fires.
    glint_timer: Duration,
    /// Remaining glint display time, if one is active.
    glint_active: Option<Duration>,
}

impl Avatar {
    /// Create a portrait with the mouth closed.
    pub fn new() -> Self {
        Self {
            poses: sprites::load_poses(),
            mouth_open: false,
            glint_timer: Duration::from_secs(GLINT_GAP_MIN_SECS),
            glint_active: None,
        }
    }

    /// Select the speech pose. Driven by the board's mouth flag.
    pub fn set_mouth(&mut self, open: bool) {
        self.mouth_open = open;
    }

    /// Advance idle animation timers. Call every frame.
    pub fn update(&mut self, delta: Duration) {
        if let Some(remaining) = self.glint_active {
            self.glint_active = remaining.checked_sub(delta);
            return;
        }

        self.glint_timer = self.glint_timer.saturating_sub(delta);
        if self.glint_timer.is_zero() {
            self.glint_active = Some(GLINT_DURATION);
            let gap = GLINT_GAP_MIN_SECS
                + (rand::random::<u64>() % (GLINT_GAP_MAX_SECS - GLINT_GAP_MIN_SECS));
            self.glint_timer = Duration::from_secs(gap);
        }
    }

    /// The pose that should be on screen right now.
    pub fn current_pose(&self) -> Pose {
        if self.mouth_open {
            Pose::Open
        } else if self.glint_active.is_some() {
            Pose::Glint
        } else {
            Pose::Closed
        }
    }

    /// Portrait bounds (width, height).
    pub fn bounds(&self) -> (u16, u16) {
        self.poses
            .get(&Pose::Closed)
            .map_or((0, 0), |frame| (frame.width, frame.height))
    }

    /// Render the portrait into `area` with per-cell coloring.
    ///
    /// Transparent cells leave whatever is underneath untouched, which is
    /// what lets the portrait overlap the quote card.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let Some(frame) = self.poses.get(&self.current_pose()) else {
            return;
        };

        let area = area.intersection(buf.area);

        // Center the frame in the target area
        let x_offset = area.width.saturating_sub(frame.width) / 2;
        let y_offset = area.height.saturating_sub(frame.height) / 2;

        for (row_idx, row) in frame.cells.iter().enumerate() {
            let y = area.y + y_offset + row_idx as u16;
            if y >= area.y + area.height {
                break;
            }

            for (col_idx, cell) in row.iter().enumerate() {
                let x = area.x + x_offset + col_idx as u16;
                if x >= area.x + area.width {
                    break;
                }

                // Skip empty/transparent cells
                if cell.is_empty() {
                    continue;
                }

                let style = Style::default().fg(cell.fg);
                buf.set_string(x, y, cell.ch.to_string(), style);
            }
        }
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouth_flag_selects_the_pose() {
        let mut avatar = Avatar::new();
        assert_eq!(avatar.current_pose(), Pose::Closed);
        avatar.set_mouth(true);
        assert_eq!(avatar.current_pose(), Pose::Open);
        avatar.set_mouth(false);
        assert_eq!(avatar.current_pose(), Pose::Closed);
    }

    #[test]
    fn open_mouth_wins_over_a_glint() {
        let mut avatar = Avatar::new();
        // Force a glint by burning down the timer.
        avatar.update(Duration::from_secs(60));
        assert_eq!(avatar.current_pose(), Pose::Glint);

        avatar.set_mouth(true);
        assert_eq!(avatar.current_pose(), Pose::Open);
    }

    #[test]
    fn glints_expire() {
        let mut avatar = Avatar::new();
        avatar.update(Duration::from_secs(60));
        assert_eq!(avatar.current_pose(), Pose::Glint);

        avatar.update(GLINT_DURATION + Duration::from_millis(20));
        assert_eq!(avatar.current_pose(), Pose::Closed);
    }

    #[test]
    fn bounds_match_the_sprite_grid() {
        let avatar = Avatar::new();
        assert_eq!(avatar.bounds(), (12, 7));
    }
}
