//! Vertex types for 2D sprite rendering

use bytemuck::{Pod, Zeroable};

use super::Sprite;

/// 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for enemy sprites
pub mod colors {
    pub const CHASER: [f32; 4] = [1.0, 0.35, 0.25, 1.0];
    pub const SHOOTER: [f32; 4] = [0.95, 0.8, 0.2, 1.0];
    pub const SPREADER: [f32; 4] = [0.6, 0.3, 0.9, 1.0];
    pub const ENEMY_PROJECTILE: [f32; 4] = [1.0, 0.5, 0.8, 1.0];
}

/// Base tint for a sprite before alpha is applied
pub fn sprite_color(sprite: Sprite) -> [f32; 4] {
    match sprite {
        Sprite::Chaser => colors::CHASER,
        Sprite::Shooter => colors::SHOOTER,
        Sprite::Spreader => colors::SPREADER,
        Sprite::EnemyProjectile => colors::ENEMY_PROJECTILE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
    }

    #[test]
    fn test_vertex_casts_to_bytes() {
        let verts = [Vertex::new(1.0, 2.0, colors::CHASER)];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 24);
    }
}
