//! Arcade Enemies - enemy actors for a 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic per-frame enemy behaviour (steering, firing, bouncing)
//! - `renderer`: Draw surface abstraction and sprite batching
//! - `tuning`: Data-driven enemy balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default play-field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Margin between the window edge and the playable stage
    pub const STAGE_PADDING: f32 = 20.0;

    /// Collision box for an enemy with no variant-specific sprite
    pub const BASE_ENEMY_SIZE: f32 = 20.0;

    /// Chaser defaults
    pub const CHASER_SPEED: f32 = 3.0;
    pub const CHASER_HEALTH: i32 = 5;
    pub const CHASER_SIZE: f32 = 28.0;
    pub const CHASER_MAX_SPEED: f32 = 7.0;
    pub const CHASER_ACCELERATION: f32 = 0.7;
    pub const CHASER_FRICTION: f32 = 0.95;
    pub const TRAIL_LENGTH: usize = 15;
    pub const TRAIL_INTERVAL_MS: u64 = 40;
    /// Alpha of the newest trail sample
    pub const TRAIL_MAX_ALPHA: u8 = 150;

    /// Shooter defaults
    pub const SHOOTER_SPEED: f32 = 2.0;
    pub const SHOOTER_HEALTH: i32 = 5;
    pub const SHOOTER_SIZE: f32 = 48.0;
    pub const SHOOTER_MAX_SPEED: f32 = 1.5;
    pub const SHOOTER_ACCELERATION: f32 = 0.2;
    pub const SHOOTER_FRICTION: f32 = 0.95;
    pub const ENGAGE_RADIUS: f32 = 240.0;
    /// Time spent in range before the first shot
    pub const ENGAGE_DELAY_MS: u64 = 500;
    pub const SHOOTER_COOLDOWN_MS: u64 = 50;
    /// Maximum aim error either side of the facing angle (degrees)
    pub const SHOOTER_SPREAD_DEG: i32 = 20;

    /// Spreader defaults
    pub const SPREADER_SPEED: f32 = 1.0;
    pub const SPREADER_HEALTH: i32 = 5;
    pub const SPREADER_SIZE: f32 = 64.0;
    pub const SPREADER_RADIUS: f32 = 15.0;
    pub const SPREADER_COOLDOWN_MS: u64 = 500;
    pub const BURST_SIZE: u32 = 4;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 5.0;
    pub const PROJECTILE_SIZE: f32 = 10.0;
}

/// Screen-space facing angle in degrees for a direction vector.
///
/// Screen +y points down, so the angle is negated to read counter-clockwise
/// the way sprite rotation does. A zero vector faces 0°.
#[inline]
pub fn facing_degrees(dir: Vec2) -> f32 {
    -dir.y.atan2(dir.x).to_degrees()
}

/// Unit vector for a screen-space angle in degrees (inverse of `facing_degrees`)
#[inline]
pub fn heading_from_degrees(angle: f32) -> Vec2 {
    let rad = angle.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}
