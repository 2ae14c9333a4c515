//! Smoothed steering shared by the seeking enemies

use glam::Vec2;

/// Unit vector from `from` toward `to`, and the distance between them.
///
/// Returns a zero direction when the points coincide.
#[inline]
pub fn seek(from: Vec2, to: Vec2) -> (Vec2, f32) {
    let delta = to - from;
    (delta.normalize_or_zero(), delta.length())
}

/// One steering step: decay the old velocity, push it toward `direction`,
/// then clamp the magnitude to `max_speed` keeping the heading.
#[inline]
pub fn steer(
    velocity: Vec2,
    direction: Vec2,
    friction: f32,
    acceleration: f32,
    max_speed: f32,
) -> Vec2 {
    (velocity * friction + direction * acceleration).clamp_length_max(max_speed)
}
