//! Rendering module
//!
//! Enemies draw into a `Surface` as rotated, alpha-blended sprite blits. The
//! `DrawList` surface records them in order so a backend can batch them into
//! vertices via `shapes::sprite_quad`.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::consts::{CHASER_SIZE, PROJECTILE_SIZE, SHOOTER_SIZE, SPREADER_SIZE};

/// Sprite images known to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Chaser,
    Shooter,
    Spreader,
    EnemyProjectile,
}

impl Sprite {
    /// Drawn size in pixels (sprites are square)
    pub fn size(&self) -> f32 {
        match self {
            Sprite::Chaser => CHASER_SIZE,
            Sprite::Shooter => SHOOTER_SIZE,
            Sprite::Spreader => SPREADER_SIZE,
            Sprite::EnemyProjectile => PROJECTILE_SIZE,
        }
    }
}

/// Anything enemies can be drawn onto
pub trait Surface {
    /// Draw `sprite` centered on `center`, rotated counter-clockwise on screen
    /// by `rotation` degrees, with opacity `alpha` (255 = opaque).
    fn blit(&mut self, sprite: Sprite, center: Vec2, rotation: f32, alpha: u8);
}

/// A single recorded blit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: Sprite,
    pub center: Vec2,
    /// Degrees, counter-clockwise on screen
    pub rotation: f32,
    pub alpha: u8,
}

/// Surface that records blits in draw order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of blits of a given sprite
    pub fn count(&self, sprite: Sprite) -> usize {
        self.commands.iter().filter(|c| c.sprite == sprite).count()
    }

    /// Triangle-list vertices for every command, in draw order
    pub fn to_vertices(&self) -> Vec<vertex::Vertex> {
        let mut vertices = Vec::with_capacity(self.commands.len() * 6);
        for cmd in &self.commands {
            vertices.extend_from_slice(&shapes::sprite_quad(cmd));
        }
        vertices
    }
}

impl Surface for DrawList {
    fn blit(&mut self, sprite: Sprite, center: Vec2, rotation: f32, alpha: u8) {
        self.commands.push(DrawCommand {
            sprite,
            center,
            rotation,
            alpha,
        });
    }
}
