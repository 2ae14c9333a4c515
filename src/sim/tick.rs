//! Per-frame arena update
//!
//! Advances every live enemy once against the current player position.

use glam::Vec2;

use super::state::Arena;

/// Input for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Where enemies aim and steer this frame
    pub player_pos: Vec2,
    /// Monotonic clock reading in milliseconds
    pub now_ms: u64,
}

impl TickInput {
    pub const fn new(player_pos: Vec2, now_ms: u64) -> Self {
        Self { player_pos, now_ms }
    }
}

/// Advance the arena by one frame
pub fn tick(arena: &mut Arena, input: &TickInput) {
    if input.now_ms < arena.time_ms {
        log::warn!(
            "Clock went backwards ({} -> {}ms), holding time",
            arena.time_ms,
            input.now_ms
        );
    } else {
        arena.time_ms = input.now_ms;
    }

    let frame = arena.frame();
    for enemy in arena.enemies.iter_mut().filter(|e| e.is_alive()) {
        enemy.update(input.player_pos, &frame, &mut arena.rng);
    }

    // Ensure deterministic ordering
    arena.normalize_order();
}
