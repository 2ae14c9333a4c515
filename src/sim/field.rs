//! Play-field bounds and per-frame timing
//!
//! Everything an enemy needs from the outside world besides the player
//! position arrives through `Frame`, so updates stay deterministic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, STAGE_PADDING};

/// Stage dimensions with the fixed margin enemies keep from the window edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            padding: STAGE_PADDING,
        }
    }
}

impl PlayField {
    pub const fn new(width: f32, height: f32, padding: f32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Whole window as a rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Lowest allowed (x, y) for a body of the given radius
    pub fn min_bound(&self, radius: f32) -> Vec2 {
        Vec2::splat(self.padding + radius)
    }

    /// Highest allowed (x, y) for a body of the given radius
    pub fn max_bound(&self, radius: f32) -> Vec2 {
        Vec2::new(
            self.width - self.padding - radius,
            self.height - self.padding - radius,
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Clock and bounds for one game-loop iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Monotonic milliseconds since the game started
    pub now_ms: u64,
    pub field: PlayField,
}

impl Frame {
    pub const fn new(now_ms: u64, field: PlayField) -> Self {
        Self { now_ms, field }
    }

    /// Frame at `now_ms` on the default field
    pub fn at(now_ms: u64) -> Self {
        Self::new(now_ms, PlayField::default())
    }

    /// True when at least `interval` ms have passed since `since`.
    /// `None` means the event never happened, which always counts as elapsed.
    #[inline]
    pub fn elapsed_since(&self, since: Option<u64>, interval: u64) -> bool {
        match since {
            Some(t) => self.now_ms.saturating_sub(t) >= interval,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let field = PlayField::new(800.0, 600.0, 20.0);
        assert_eq!(field.min_bound(15.0), Vec2::splat(35.0));
        assert_eq!(field.max_bound(15.0), Vec2::new(765.0, 565.0));
    }

    #[test]
    fn test_elapsed_since() {
        let frame = Frame::at(1000);
        assert!(frame.elapsed_since(None, 500));
        assert!(frame.elapsed_since(Some(500), 500));
        assert!(!frame.elapsed_since(Some(501), 500));
        // Timestamps from the future never count as elapsed
        assert!(!frame.elapsed_since(Some(2000), 1));
    }
}
