//! Chaser: seeks the player and leaves a fading afterimage

use std::collections::VecDeque;

use glam::Vec2;

use super::enemy::EnemyBase;
use super::field::Frame;
use super::steering::{seek, steer};
use crate::consts::TRAIL_MAX_ALPHA;
use crate::facing_degrees;
use crate::renderer::{Sprite, Surface};
use crate::tuning::ChaserTuning;

/// Past position and heading, kept for the afterimage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub pos: Vec2,
    pub direction: Vec2,
}

#[derive(Debug, Clone)]
pub struct Chaser {
    pub base: EnemyBase,
    pub velocity: Vec2,
    /// Unit vector toward the player, or zero when on top of it
    pub direction: Vec2,
    pub max_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
    /// Oldest sample first
    pub trail: VecDeque<TrailSample>,
    trail_capacity: usize,
    trail_interval_ms: u64,
    last_trail_ms: Option<u64>,
}

impl Chaser {
    pub fn new(pos: Vec2) -> Self {
        Self::with_tuning(pos, &ChaserTuning::default())
    }

    pub fn with_tuning(pos: Vec2, tuning: &ChaserTuning) -> Self {
        Self {
            base: EnemyBase::new(pos, tuning.speed, tuning.health).with_size(tuning.size),
            velocity: Vec2::ZERO,
            direction: Vec2::ZERO,
            max_speed: tuning.max_speed,
            acceleration: tuning.acceleration,
            friction: tuning.friction,
            trail: VecDeque::with_capacity(tuning.trail_length + 1),
            trail_capacity: tuning.trail_length,
            trail_interval_ms: tuning.trail_interval_ms,
            last_trail_ms: None,
        }
    }

    pub fn update(&mut self, player_pos: Vec2, frame: &Frame) {
        let (direction, _) = seek(self.base.pos, player_pos);
        self.direction = direction;

        self.velocity = steer(
            self.velocity,
            self.direction,
            self.friction,
            self.acceleration,
            self.max_speed,
        );
        self.base.pos += self.velocity;

        if frame.elapsed_since(self.last_trail_ms, self.trail_interval_ms) {
            self.record_trail();
            self.last_trail_ms = Some(frame.now_ms);
        }
    }

    fn record_trail(&mut self) {
        self.trail.push_back(TrailSample {
            pos: self.base.pos,
            direction: self.direction,
        });
        while self.trail.len() > self.trail_capacity {
            self.trail.pop_front();
        }
    }

    /// Opacity of trail sample `index`, rising linearly toward the newest
    pub fn trail_alpha(&self, index: usize) -> u8 {
        let step = TRAIL_MAX_ALPHA as usize / self.trail.len().max(1);
        (index * step).min(u8::MAX as usize) as u8
    }

    /// Body first, then the trail oldest to newest so fresher ghosts overlay
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.blit(Sprite::Chaser, self.base.pos, facing_degrees(self.direction), 255);

        for (i, sample) in self.trail.iter().enumerate() {
            surface.blit(
                Sprite::Chaser,
                sample.pos,
                facing_degrees(sample.direction),
                self.trail_alpha(i),
            );
        }
    }
}
