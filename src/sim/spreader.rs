//! Spreader: bounces around the stage firing rotating four-way bursts
//!
//! Movement ignores the player. The burst and the body sprite both turn with
//! a rotation offset of one degree per 10 ms of game time.

use glam::Vec2;
use rand::Rng;

use super::enemy::EnemyBase;
use super::field::Frame;
use super::projectile::{Projectile, advance_all};
use crate::consts::BURST_SIZE;
use crate::renderer::{Sprite, Surface};
use crate::tuning::SpreaderTuning;

/// Rotation offset in whole degrees at `now_ms`
#[inline]
pub fn rotation_offset(now_ms: u64) -> f32 {
    (now_ms / 10) as f32
}

#[derive(Debug, Clone)]
pub struct Spreader {
    pub base: EnemyBase,
    /// Each component is -1 or +1
    pub direction: Vec2,
    /// Bounce radius used against the padded stage
    pub radius: f32,
    pub projectiles: Vec<Projectile>,
    cooldown_ms: u64,
    projectile_speed: f32,
    last_fire_ms: Option<u64>,
}

impl Spreader {
    /// Starts heading in a random diagonal
    pub fn new<R: Rng + ?Sized>(pos: Vec2, rng: &mut R) -> Self {
        Self::with_tuning(pos, &SpreaderTuning::default(), rng)
    }

    pub fn with_tuning<R: Rng + ?Sized>(pos: Vec2, tuning: &SpreaderTuning, rng: &mut R) -> Self {
        let mut sign = || if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let direction = Vec2::new(sign(), sign());
        Self {
            base: EnemyBase::new(pos, tuning.speed, tuning.health).with_size(tuning.size),
            direction,
            radius: tuning.radius,
            projectiles: Vec::new(),
            cooldown_ms: tuning.cooldown_ms,
            projectile_speed: tuning.projectile_speed,
            last_fire_ms: None,
        }
    }

    pub fn with_direction(mut self, direction: Vec2) -> Self {
        self.direction = direction;
        self
    }

    /// `_player_pos` is accepted for a uniform update signature; spreaders
    /// move on their own.
    pub fn update(&mut self, _player_pos: Vec2, frame: &Frame) {
        self.base.pos += self.direction * self.base.speed;
        self.bounce(frame);

        if frame.elapsed_since(self.last_fire_ms, self.cooldown_ms) {
            self.burst(frame);
            self.last_fire_ms = Some(frame.now_ms);
        }

        advance_all(&mut self.projectiles);
    }

    /// Flip any axis that has left the padded stage while still heading out.
    ///
    /// The move is applied first, so the step that crosses a bound is taken
    /// and the flip happens at the end of that same update.
    fn bounce(&mut self, frame: &Frame) {
        let min = frame.field.min_bound(self.radius);
        let max = frame.field.max_bound(self.radius);
        let pos = self.base.pos;

        if (pos.x < min.x && self.direction.x < 0.0) || (pos.x > max.x && self.direction.x > 0.0) {
            self.direction.x = -self.direction.x;
        }
        if (pos.y < min.y && self.direction.y < 0.0) || (pos.y > max.y && self.direction.y > 0.0) {
            self.direction.y = -self.direction.y;
        }
    }

    fn burst(&mut self, frame: &Frame) {
        let offset = rotation_offset(frame.now_ms);
        let step = 360.0 / BURST_SIZE as f32;
        for i in 0..BURST_SIZE {
            let angle = i as f32 * step - offset;
            self.projectiles.push(Projectile::new(
                self.base.id,
                self.base.pos,
                angle,
                self.projectile_speed,
                &frame.field,
            ));
        }
        log::debug!(
            "Spreader {} burst at {}ms ({} live shots)",
            self.base.id,
            frame.now_ms,
            self.projectiles.len()
        );
    }

    /// Shots first, then the spinning body on top
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, now_ms: u64) {
        for proj in &self.projectiles {
            proj.draw(surface);
        }
        surface.blit(Sprite::Spreader, self.base.pos, rotation_offset(now_ms), 255);
    }
}
