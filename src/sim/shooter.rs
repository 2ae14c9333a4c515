//! Shooter: closes to range, stops, and fires aimed shots with spread
//!
//! Engagement is a two-state machine. `Approaching` steers toward the player;
//! `Engaging` cuts acceleration (existing velocity still decays through
//! friction) and fires once the shooter has been in range long enough.

use glam::Vec2;
use rand::Rng;

use super::enemy::EnemyBase;
use super::field::Frame;
use super::projectile::{Projectile, advance_all};
use super::steering::{seek, steer};
use crate::facing_degrees;
use crate::renderer::{Sprite, Surface};
use crate::tuning::ShooterTuning;

/// Engagement state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterState {
    /// Out of range, closing in
    Approaching,
    /// In range since `since_ms`
    Engaging { since_ms: u64 },
}

#[derive(Debug, Clone)]
pub struct Shooter {
    pub base: EnemyBase,
    pub velocity: Vec2,
    pub direction: Vec2,
    pub max_speed: f32,
    /// Current acceleration (zero while engaging)
    pub acceleration: f32,
    pub friction: f32,
    pub state: ShooterState,
    pub projectiles: Vec<Projectile>,
    /// Acceleration restored when leaving range
    base_acceleration: f32,
    engage_radius: f32,
    engage_delay_ms: u64,
    cooldown_ms: u64,
    spread_deg: i32,
    projectile_speed: f32,
    last_fire_ms: Option<u64>,
}

impl Shooter {
    pub fn new(pos: Vec2) -> Self {
        Self::with_tuning(pos, &ShooterTuning::default())
    }

    pub fn with_tuning(pos: Vec2, tuning: &ShooterTuning) -> Self {
        Self {
            base: EnemyBase::new(pos, tuning.speed, tuning.health).with_size(tuning.size),
            velocity: Vec2::ZERO,
            direction: Vec2::ZERO,
            max_speed: tuning.max_speed,
            acceleration: tuning.acceleration,
            friction: tuning.friction,
            state: ShooterState::Approaching,
            projectiles: Vec::new(),
            base_acceleration: tuning.acceleration,
            engage_radius: tuning.engage_radius,
            engage_delay_ms: tuning.engage_delay_ms,
            cooldown_ms: tuning.cooldown_ms,
            spread_deg: tuning.spread_deg,
            projectile_speed: tuning.projectile_speed,
            last_fire_ms: None,
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, player_pos: Vec2, frame: &Frame, rng: &mut R) {
        let (direction, distance) = seek(self.base.pos, player_pos);
        self.direction = direction;

        self.velocity = steer(
            self.velocity,
            self.direction,
            self.friction,
            self.acceleration,
            self.max_speed,
        );
        self.base.pos += self.velocity;

        if distance < self.engage_radius {
            let since_ms = match self.state {
                ShooterState::Engaging { since_ms } => since_ms,
                ShooterState::Approaching => {
                    log::debug!("Shooter {} engaging at distance {:.1}", self.base.id, distance);
                    self.state = ShooterState::Engaging {
                        since_ms: frame.now_ms,
                    };
                    frame.now_ms
                }
            };

            if frame.elapsed_since(Some(since_ms), self.engage_delay_ms)
                && frame.elapsed_since(self.last_fire_ms, self.cooldown_ms)
            {
                self.fire(frame, rng);
            }
            self.acceleration = 0.0;
        } else {
            if self.state != ShooterState::Approaching {
                log::debug!("Shooter {} lost range, approaching", self.base.id);
            }
            self.state = ShooterState::Approaching;
            self.acceleration = self.base_acceleration;
        }

        advance_all(&mut self.projectiles);
    }

    fn fire<R: Rng + ?Sized>(&mut self, frame: &Frame, rng: &mut R) {
        let spread = self.spread_deg;
        let jitter = rng.random_range(-spread..=spread) as f32;
        let angle = facing_degrees(self.direction) + jitter;
        self.projectiles.push(Projectile::new(
            self.base.id,
            self.base.pos,
            angle,
            self.projectile_speed,
            &frame.field,
        ));
        self.last_fire_ms = Some(frame.now_ms);
    }

    pub fn is_engaging(&self) -> bool {
        matches!(self.state, ShooterState::Engaging { .. })
    }

    /// Body, then its live shots
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.blit(Sprite::Shooter, self.base.pos, facing_degrees(self.direction), 255);
        for proj in &self.projectiles {
            proj.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::DrawList;
    use crate::sim::PlayField;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn big_frame(now_ms: u64) -> Frame {
        // Wide enough that shots never leave the window during a test
        Frame::new(now_ms, PlayField::new(100_000.0, 100_000.0, 0.0))
    }

    const ORIGIN: Vec2 = Vec2::new(50_000.0, 50_000.0);

    #[test]
    fn test_never_fires_out_of_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut shooter = Shooter::new(ORIGIN);
        // Keep the player far away by moving it with the shooter
        for t in 0..3000 {
            let player = shooter.base.pos + Vec2::new(1000.0, 0.0);
            shooter.update(player, &big_frame(t), &mut rng);
            assert!(shooter.projectiles.is_empty());
            assert_eq!(shooter.state, ShooterState::Approaching);
        }
    }

    #[test]
    fn test_engage_delay_then_one_shot_per_cooldown() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut shooter = Shooter::new(ORIGIN);
        let player = ORIGIN + Vec2::new(100.0, 0.0);

        shooter.update(player, &big_frame(1000), &mut rng);
        assert_eq!(shooter.state, ShooterState::Engaging { since_ms: 1000 });

        for t in 1001..1500 {
            shooter.update(player, &big_frame(t), &mut rng);
        }
        assert!(shooter.projectiles.is_empty());

        shooter.update(player, &big_frame(1500), &mut rng);
        assert_eq!(shooter.projectiles.len(), 1);

        for t in 1501..1550 {
            shooter.update(player, &big_frame(t), &mut rng);
        }
        assert_eq!(shooter.projectiles.len(), 1);

        shooter.update(player, &big_frame(1550), &mut rng);
        assert_eq!(shooter.projectiles.len(), 2);

        for t in 1551..=2000 {
            shooter.update(player, &big_frame(t), &mut rng);
        }
        // Shots at 1500, 1550, ..., 2000
        assert_eq!(shooter.projectiles.len(), 11);
    }

    #[test]
    fn test_acceleration_zeroed_while_engaging() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut shooter = Shooter::new(ORIGIN);
        let player = ORIGIN + Vec2::new(100.0, 0.0);
        shooter.update(player, &big_frame(0), &mut rng);
        assert_eq!(shooter.acceleration, 0.0);

        let speed = shooter.velocity.length();
        shooter.update(player, &big_frame(1), &mut rng);
        assert!(shooter.velocity.length() < speed);
    }

    #[test]
    fn test_leaving_range_resets_engagement() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut shooter = Shooter::new(ORIGIN);
        let near = ORIGIN + Vec2::new(100.0, 0.0);
        let far = ORIGIN + Vec2::new(1000.0, 0.0);

        shooter.update(near, &big_frame(0), &mut rng);
        assert!(shooter.is_engaging());
        shooter.update(far, &big_frame(400), &mut rng);
        assert!(!shooter.is_engaging());
        assert_eq!(shooter.state, ShooterState::Approaching);
        assert_eq!(shooter.acceleration, SHOOTER_ACCELERATION);

        // Re-entering restarts the delay from scratch
        shooter.update(near, &big_frame(600), &mut rng);
        assert_eq!(shooter.state, ShooterState::Engaging { since_ms: 600 });
        shooter.update(near, &big_frame(1000), &mut rng);
        assert!(shooter.projectiles.is_empty());
        shooter.update(near, &big_frame(1100), &mut rng);
        assert_eq!(shooter.projectiles.len(), 1);
    }

    #[test]
    fn test_shot_angle_within_spread() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut shooter = Shooter::new(ORIGIN);
        // Player due south on screen, facing -90°
        let player = ORIGIN + Vec2::new(0.0, 100.0);
        for t in 0..=5000 {
            shooter.update(player, &big_frame(t), &mut rng);
        }
        assert!(!shooter.projectiles.is_empty());
        for proj in &shooter.projectiles {
            let offset = proj.angle - (-90.0);
            assert!(offset.abs() <= SHOOTER_SPREAD_DEG as f32 + 1e-3);
            // Spread is whole degrees
            assert!((offset - offset.round()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let run = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut shooter = Shooter::new(ORIGIN);
            let player = ORIGIN + Vec2::new(100.0, 0.0);
            for t in 0..800 {
                shooter.update(player, &big_frame(t), &mut rng);
            }
            shooter.projectiles.iter().map(|p| p.angle).collect::<Vec<_>>()
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn test_prunes_destroyed_shots() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut shooter = Shooter::new(ORIGIN);
        let player = ORIGIN + Vec2::new(100.0, 0.0);
        for t in 0..=600 {
            shooter.update(player, &big_frame(t), &mut rng);
        }
        let before = shooter.projectiles.len();
        assert!(before > 0);
        shooter.projectiles[0].destroy();
        // Stay inside the cooldown so no new shot is added
        shooter.update(player, &big_frame(601), &mut rng);
        assert_eq!(shooter.projectiles.len(), before - 1);
        assert!(shooter.projectiles.iter().all(|p| !p.destroyed));
    }

    #[test]
    fn test_draw_body_then_shots() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut shooter = Shooter::new(ORIGIN);
        let player = ORIGIN + Vec2::new(100.0, 0.0);
        for t in 0..=600 {
            shooter.update(player, &big_frame(t), &mut rng);
        }
        let mut list = DrawList::new();
        shooter.draw(&mut list);
        assert_eq!(list.commands[0].sprite, Sprite::Shooter);
        assert_eq!(list.count(Sprite::EnemyProjectile), shooter.projectiles.len());
    }

    #[test]
    fn test_shots_owned_by_shooter() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut shooter = Shooter::new(ORIGIN);
        shooter.base.id = 42;
        let player = ORIGIN + Vec2::new(100.0, 0.0);
        for t in 0..=500 {
            shooter.update(player, &big_frame(t), &mut rng);
        }
        assert_eq!(shooter.projectiles.len(), 1);
        assert_eq!(shooter.projectiles[0].owner, 42);
    }
}
