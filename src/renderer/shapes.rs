//! Shape generation for sprite blits

use glam::Vec2;

use super::DrawCommand;
use super::vertex::{Vertex, sprite_color};

/// Rotate `v` counter-clockwise *on screen* by `degrees`.
///
/// Screen +y points down, so this is a clockwise rotation in math terms.
#[inline]
pub fn rotate_screen(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

/// Two triangles covering a rotated square sprite
pub fn sprite_quad(cmd: &DrawCommand) -> [Vertex; 6] {
    let half = cmd.sprite.size() / 2.0;
    let mut color = sprite_color(cmd.sprite);
    color[3] *= cmd.alpha as f32 / 255.0;

    let corner = |x: f32, y: f32| {
        let p = cmd.center + rotate_screen(Vec2::new(x, y), cmd.rotation);
        Vertex::new(p.x, p.y, color)
    };

    let tl = corner(-half, -half);
    let tr = corner(half, -half);
    let bl = corner(-half, half);
    let br = corner(half, half);

    [tl, bl, tr, tr, bl, br]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Sprite;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_rotate_screen_ccw() {
        // Facing right, a quarter turn counter-clockwise on screen faces up (-y)
        assert!(close(rotate_screen(Vec2::X, 90.0), Vec2::new(0.0, -1.0)));
        assert!(close(rotate_screen(Vec2::X, 0.0), Vec2::X));
    }

    #[test]
    fn test_sprite_quad_unrotated() {
        let cmd = DrawCommand {
            sprite: Sprite::Chaser,
            center: Vec2::new(100.0, 100.0),
            rotation: 0.0,
            alpha: 255,
        };
        let quad = sprite_quad(&cmd);
        assert_eq!(quad[0].position, [86.0, 86.0]);
        assert_eq!(quad[5].position, [114.0, 114.0]);
        assert_eq!(quad[0].color[3], 1.0);
    }

    #[test]
    fn test_sprite_quad_applies_alpha() {
        let cmd = DrawCommand {
            sprite: Sprite::Chaser,
            center: Vec2::ZERO,
            rotation: 0.0,
            alpha: 0,
        };
        let quad = sprite_quad(&cmd);
        assert!(quad.iter().all(|v| v.color[3] == 0.0));
    }
}
