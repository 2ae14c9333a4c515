//! Enemy projectiles
//!
//! A shot flies in a straight line at a fixed speed and retires itself once
//! it leaves the window. Hit detection can retire it early via `destroy`.

use glam::Vec2;

use super::collision::Rect;
use super::field::PlayField;
use crate::consts::PROJECTILE_SIZE;
use crate::heading_from_degrees;
use crate::renderer::{Sprite, Surface};

/// A fired shot
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Id of the enemy that fired it
    pub owner: u32,
    pub pos: Vec2,
    /// Screen-space angle in degrees (0 = right, 90 = up)
    pub angle: f32,
    pub speed: f32,
    pub destroyed: bool,
    /// Window the projectile lives in
    bounds: Rect,
}

impl Projectile {
    pub fn new(owner: u32, origin: Vec2, angle: f32, speed: f32, field: &PlayField) -> Self {
        Self {
            owner,
            pos: origin,
            angle,
            speed,
            destroyed: false,
            bounds: field.rect(),
        }
    }

    /// Per-frame displacement
    pub fn velocity(&self) -> Vec2 {
        heading_from_degrees(self.angle) * self.speed
    }

    /// Advance one frame; flags the shot destroyed once it leaves the window
    pub fn update(&mut self) {
        if self.destroyed {
            return;
        }
        self.pos += self.velocity();
        if !self.bounds.contains(self.pos) {
            self.destroyed = true;
        }
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(PROJECTILE_SIZE))
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.blit(Sprite::EnemyProjectile, self.pos, self.angle, 255);
    }
}

/// Advance every live shot and drop the destroyed ones, so the list holds
/// only live projectiles between frames
pub(crate) fn advance_all(projectiles: &mut Vec<Projectile>) {
    for proj in projectiles.iter_mut() {
        proj.update();
    }
    projectiles.retain(|p| !p.destroyed);
}
