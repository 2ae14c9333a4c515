//! Shared enemy contract
//!
//! `EnemyBase` holds what every enemy has (position, health, collision box)
//! and enforces at-most-once destruction. `Enemy` is the closed set of
//! behaviours the game loop drives each frame.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chaser::Chaser;
use super::collision::Rect;
use super::field::Frame;
use super::projectile::Projectile;
use super::shooter::Shooter;
use super::spreader::Spreader;
use crate::consts::BASE_ENEMY_SIZE;
use crate::renderer::Surface;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Chaser,
    Shooter,
    Spreader,
}

impl EnemyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Chaser => "chaser",
            EnemyKind::Shooter => "shooter",
            EnemyKind::Spreader => "spreader",
        }
    }
}

/// Result of applying damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Still alive with this much health
    Hurt { remaining: i32 },
    /// This hit killed the enemy
    Destroyed,
    /// Enemy was already dead; health still dropped but nothing fired
    AlreadyDead,
}

/// State common to every enemy
#[derive(Debug, Clone)]
pub struct EnemyBase {
    /// Stable id assigned by the arena (0 when standalone)
    pub id: u32,
    pub pos: Vec2,
    /// Base movement rate
    pub speed: f32,
    pub health: i32,
    /// Side length of the square collision box
    pub size: f32,
    alive: bool,
}

impl EnemyBase {
    /// Inputs are trusted: zero or negative speed/health are not rejected.
    pub fn new(pos: Vec2, speed: f32, health: i32) -> Self {
        Self {
            id: 0,
            pos,
            speed,
            health,
            size: BASE_ENEMY_SIZE,
            alive: true,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Collision box centered on the current position
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.size))
    }

    /// Subtract `amount` from health, destroying the enemy when it first
    /// reaches zero or below. Health saturates at `i32::MIN`.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        self.health = self.health.saturating_sub(amount);
        if !self.alive {
            return DamageOutcome::AlreadyDead;
        }
        if self.health <= 0 {
            self.destroy();
            DamageOutcome::Destroyed
        } else {
            DamageOutcome::Hurt {
                remaining: self.health,
            }
        }
    }

    /// Mark the enemy removed. Returns false if it already was.
    ///
    /// Taking it out of the active set is up to the owner.
    pub fn destroy(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        log::info!("Enemy {} destroyed at ({:.1}, {:.1})", self.id, self.pos.x, self.pos.y);
        true
    }

    pub fn check_collision(&self, other: &Rect) -> bool {
        self.rect().intersects(other)
    }
}

/// Any enemy the game loop can drive
#[derive(Debug, Clone)]
pub enum Enemy {
    Chaser(Chaser),
    Shooter(Shooter),
    Spreader(Spreader),
}

impl Enemy {
    pub fn kind(&self) -> EnemyKind {
        match self {
            Enemy::Chaser(_) => EnemyKind::Chaser,
            Enemy::Shooter(_) => EnemyKind::Shooter,
            Enemy::Spreader(_) => EnemyKind::Spreader,
        }
    }

    pub fn base(&self) -> &EnemyBase {
        match self {
            Enemy::Chaser(e) => &e.base,
            Enemy::Shooter(e) => &e.base,
            Enemy::Spreader(e) => &e.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut EnemyBase {
        match self {
            Enemy::Chaser(e) => &mut e.base,
            Enemy::Shooter(e) => &mut e.base,
            Enemy::Spreader(e) => &mut e.base,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.base().id
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.base().pos
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.base().is_alive()
    }

    /// Advance one frame toward (or around) the player
    pub fn update<R: Rng + ?Sized>(&mut self, player_pos: Vec2, frame: &Frame, rng: &mut R) {
        match self {
            Enemy::Chaser(e) => e.update(player_pos, frame),
            Enemy::Shooter(e) => e.update(player_pos, frame, rng),
            Enemy::Spreader(e) => e.update(player_pos, frame),
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, frame: &Frame) {
        match self {
            Enemy::Chaser(e) => e.draw(surface),
            Enemy::Shooter(e) => e.draw(surface),
            Enemy::Spreader(e) => e.draw(surface, frame.now_ms),
        }
    }

    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        self.base_mut().take_damage(amount)
    }

    pub fn check_collision(&self, other: &Rect) -> bool {
        self.base().check_collision(other)
    }

    /// Live projectiles owned by this enemy
    pub fn projectiles(&self) -> &[Projectile] {
        match self {
            Enemy::Chaser(_) => &[],
            Enemy::Shooter(e) => &e.projectiles,
            Enemy::Spreader(e) => &e.projectiles,
        }
    }

    pub fn projectiles_mut(&mut self) -> &mut [Projectile] {
        match self {
            Enemy::Chaser(_) => &mut [],
            Enemy::Shooter(e) => &mut e.projectiles,
            Enemy::Spreader(e) => &mut e.projectiles,
        }
    }
}

impl From<Chaser> for Enemy {
    fn from(e: Chaser) -> Self {
        Enemy::Chaser(e)
    }
}

impl From<Shooter> for Enemy {
    fn from(e: Shooter) -> Self {
        Enemy::Shooter(e)
    }
}

impl From<Spreader> for Enemy {
    fn from(e: Spreader) -> Self {
        Enemy::Spreader(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_damage_then_kill_fires_once() {
        let mut base = EnemyBase::new(Vec2::ZERO, 1.0, 5);
        assert_eq!(base.take_damage(3), DamageOutcome::Hurt { remaining: 2 });
        assert!(base.is_alive());

        assert_eq!(base.take_damage(3), DamageOutcome::Destroyed);
        assert_eq!(base.health, -1);
        assert!(!base.is_alive());

        assert_eq!(base.take_damage(3), DamageOutcome::AlreadyDead);
        assert_eq!(base.health, -4);
    }

    #[test]
    fn test_overkill_by_one_destroys() {
        let mut base = EnemyBase::new(Vec2::ZERO, 1.0, 5);
        let h = base.health;
        assert_eq!(base.take_damage(h + 1), DamageOutcome::Destroyed);
        assert!(base.health <= 0);
    }

    #[test]
    fn test_exact_lethal_damage_destroys() {
        let mut base = EnemyBase::new(Vec2::ZERO, 1.0, 5);
        assert_eq!(base.take_damage(5), DamageOutcome::Destroyed);
        assert_eq!(base.health, 0);
    }

    #[test]
    fn test_repeated_huge_damage_saturates() {
        let mut base = EnemyBase::new(Vec2::ZERO, 1.0, 5);
        assert_eq!(base.take_damage(i32::MAX), DamageOutcome::Destroyed);
        assert_eq!(base.take_damage(i32::MAX), DamageOutcome::AlreadyDead);
        assert_eq!(base.health, i32::MIN);
        assert_eq!(base.take_damage(1), DamageOutcome::AlreadyDead);
        assert_eq!(base.health, i32::MIN);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut base = EnemyBase::new(Vec2::ZERO, 1.0, 5);
        assert!(base.destroy());
        assert!(!base.destroy());
        assert!(!base.is_alive());
    }

    #[test]
    fn test_zero_damage_keeps_alive() {
        let mut base = EnemyBase::new(Vec2::ZERO, 1.0, 5);
        assert_eq!(base.take_damage(0), DamageOutcome::Hurt { remaining: 5 });
    }

    #[test]
    fn test_check_collision_follows_position() {
        let mut base = EnemyBase::new(Vec2::new(100.0, 100.0), 1.0, 5);
        let target = Rect::new(105.0, 105.0, 4.0, 4.0);
        assert!(base.check_collision(&target));

        base.pos = Vec2::new(300.0, 300.0);
        assert!(!base.check_collision(&target));
    }

    #[test]
    fn test_every_variant_destroys_once() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut enemies: Vec<Enemy> = vec![
            Chaser::new(Vec2::new(50.0, 50.0)).into(),
            Shooter::new(Vec2::new(50.0, 50.0)).into(),
            Spreader::new(Vec2::new(50.0, 50.0), &mut rng).into(),
        ];
        for enemy in &mut enemies {
            let h = enemy.base().health;
            assert_eq!(enemy.take_damage(h + 1), DamageOutcome::Destroyed);
            assert_eq!(enemy.take_damage(1), DamageOutcome::AlreadyDead);
            assert!(!enemy.is_alive());
        }
    }

    #[test]
    fn test_kinds() {
        let mut rng = Pcg32::seed_from_u64(1);
        let chaser: Enemy = Chaser::new(Vec2::ZERO).into();
        let spreader: Enemy = Spreader::new(Vec2::ZERO, &mut rng).into();
        assert_eq!(chaser.kind(), EnemyKind::Chaser);
        assert_eq!(spreader.kind().as_str(), "spreader");
        assert!(chaser.projectiles().is_empty());
    }
}
