//! Deterministic enemy simulation
//!
//! All enemy behaviour lives here. This module must stay deterministic:
//! - Time only through `Frame::now_ms`
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - Rendering only through the `Surface` trait

pub mod chaser;
pub mod collision;
pub mod enemy;
pub mod field;
pub mod projectile;
pub mod shooter;
pub mod spreader;
pub mod state;
pub mod steering;
pub mod tick;

pub use chaser::{Chaser, TrailSample};
pub use collision::Rect;
pub use enemy::{DamageOutcome, Enemy, EnemyBase, EnemyKind};
pub use field::{Frame, PlayField};
pub use projectile::Projectile;
pub use shooter::{Shooter, ShooterState};
pub use spreader::{Spreader, rotation_offset};
pub use state::{Arena, GameEvent};
pub use tick::{TickInput, tick};
