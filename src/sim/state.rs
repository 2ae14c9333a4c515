//! Arena state: the active enemies and everything needed to drive them
//! deterministically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::chaser::Chaser;
use super::collision::Rect;
use super::enemy::{DamageOutcome, Enemy, EnemyKind};
use super::field::{Frame, PlayField};
use super::shooter::Shooter;
use super::spreader::Spreader;
use crate::renderer::Surface;
use crate::tuning::Tuning;

/// Notable things that happened to enemies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    EnemySpawned { id: u32, kind: EnemyKind },
    EnemyDestroyed { id: u32, kind: EnemyKind, pos: Vec2 },
}

/// All live enemies plus the clock, bounds and RNG they share
#[derive(Debug, Clone)]
pub struct Arena {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Active enemies (sorted by id for determinism)
    pub enemies: Vec<Enemy>,
    /// Clock reading of the last tick
    pub time_ms: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl Arena {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            tuning,
            enemies: Vec::new(),
            time_ms: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn field(&self) -> PlayField {
        self.tuning.field
    }

    /// Frame for the current clock reading
    pub fn frame(&self) -> Frame {
        Frame::new(self.time_ms, self.tuning.field)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an enemy of `kind` at `pos` using the arena's tuning
    pub fn spawn(&mut self, kind: EnemyKind, pos: Vec2) -> GameEvent {
        let id = self.next_entity_id();
        let mut enemy: Enemy = match kind {
            EnemyKind::Chaser => Chaser::with_tuning(pos, &self.tuning.chaser).into(),
            EnemyKind::Shooter => Shooter::with_tuning(pos, &self.tuning.shooter).into(),
            EnemyKind::Spreader => {
                Spreader::with_tuning(pos, &self.tuning.spreader, &mut self.rng).into()
            }
        };
        enemy.base_mut().id = id;
        log::info!("Spawned {} {} at ({:.1}, {:.1})", kind.as_str(), id, pos.x, pos.y);
        self.enemies.push(enemy);
        GameEvent::EnemySpawned { id, kind }
    }

    pub fn get(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id() == id)
    }

    pub fn alive_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    /// Damage every live enemy overlapping `rect`
    pub fn hit(&mut self, rect: &Rect, amount: i32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for enemy in self.enemies.iter_mut().filter(|e| e.is_alive()) {
            if !enemy.check_collision(rect) {
                continue;
            }
            if enemy.take_damage(amount) == DamageOutcome::Destroyed {
                events.push(GameEvent::EnemyDestroyed {
                    id: enemy.id(),
                    kind: enemy.kind(),
                    pos: enemy.position(),
                });
            }
        }
        events
    }

    /// Retire enemy shots overlapping the player; returns how many hit.
    ///
    /// Shots of dead enemies are frozen and undrawn until `sweep`, so they
    /// never count.
    pub fn player_hit(&mut self, player: &Rect) -> usize {
        let mut hits = 0;
        for enemy in self.enemies.iter_mut().filter(|e| e.is_alive()) {
            for proj in enemy.projectiles_mut() {
                if !proj.destroyed && proj.rect().intersects(player) {
                    proj.destroy();
                    hits += 1;
                }
            }
        }
        hits
    }

    /// Remove dead enemies; their shots go with them
    pub fn sweep(&mut self) -> usize {
        let before = self.enemies.len();
        self.enemies.retain(|e| e.is_alive());
        before - self.enemies.len()
    }

    /// Total live enemy projectiles
    pub fn projectile_count(&self) -> usize {
        self.enemies.iter().map(|e| e.projectiles().len()).sum()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let frame = self.frame();
        for enemy in self.enemies.iter().filter(|e| e.is_alive()) {
            enemy.draw(surface, &frame);
        }
    }

    /// Ensure enemies are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id());
    }
}
