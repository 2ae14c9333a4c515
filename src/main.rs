//! Arcade Enemies - headless demo
//!
//! Runs a few seconds of simulated play against a circling player and logs
//! what the enemies did. Pass a tuning JSON path to try other balance values.

use glam::Vec2;

use arcade_enemies::Tuning;
use arcade_enemies::renderer::DrawList;
use arcade_enemies::sim::{Arena, Enemy, EnemyKind, GameEvent, Rect, TickInput, tick};

/// 60 fps
const FRAME_MS: u64 = 16;
const DEMO_FRAMES: u64 = 600;
/// Frames between player weapon pulses
const PULSE_EVERY: u64 = 20;
const PULSE_SIZE: f32 = 80.0;
const PLAYER_SIZE: f32 = 24.0;

fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        log::info!("Using default tuning");
        return Tuning::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Rejected tuning {}: {} - using defaults", path, e);
                Tuning::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read {}: {} - using defaults", path, e);
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Arcade Enemies demo starting...");

    let mut arena = Arena::new(0x5eed, load_tuning());
    let field = arena.field();

    let center = field.center();
    arena.spawn(EnemyKind::Chaser, Vec2::new(field.width * 0.1, field.height * 0.1));
    arena.spawn(EnemyKind::Shooter, Vec2::new(field.width * 0.9, field.height * 0.2));
    arena.spawn(EnemyKind::Spreader, center);
    log::info!("Arena initialized with seed: {}", arena.seed);

    let mut kills = 0;
    let mut hits_taken = 0;
    let mut peak_shots = 0;

    for frame in 0..DEMO_FRAMES {
        let theta = frame as f32 * 0.02;
        let player_pos = center + Vec2::new(theta.cos(), theta.sin()) * field.height * 0.3;

        tick(&mut arena, &TickInput::new(player_pos, frame * FRAME_MS));

        let player_rect = Rect::from_center(player_pos, Vec2::splat(PLAYER_SIZE));
        hits_taken += arena.player_hit(&player_rect);

        if frame % PULSE_EVERY == 0 {
            let pulse = Rect::from_center(player_pos, Vec2::splat(PULSE_SIZE));
            for event in arena.hit(&pulse, 1) {
                if let GameEvent::EnemyDestroyed { id, kind, pos } = event {
                    log::info!(
                        "Player killed {} {} at ({:.0}, {:.0})",
                        kind.as_str(),
                        id,
                        pos.x,
                        pos.y
                    );
                    kills += 1;
                }
            }
            arena.sweep();
        }

        peak_shots = peak_shots.max(arena.projectile_count());
    }

    let mut list = DrawList::new();
    arena.draw(&mut list);
    let vertices = list.to_vertices();
    let engaging = arena
        .enemies
        .iter()
        .filter(|e| matches!(e, Enemy::Shooter(s) if s.is_engaging()))
        .count();

    log::info!(
        "Demo finished: {} kills, {} hits taken, {} enemies left ({} shooters engaging), \
         peak {} shots in flight",
        kills,
        hits_taken,
        arena.alive_count(),
        engaging,
        peak_shots
    );
    log::info!("Last frame: {} blits, {} vertices", list.len(), vertices.len());
}
