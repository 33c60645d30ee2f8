//! Render sampling
//!
//! The simulation never draws. Hosts implement [`RenderSink`] and the scene
//! pushes one [`RenderInstance`] per sprite it wants on screen, ghosts
//! included.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::world::{WorldSize, ghost_positions};
use crate::consts::GHOST_COUNT;

/// Which texture a renderer should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Rocket,
    Bullet,
    Asteroid,
}

/// Sampled sprite state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderInstance {
    pub pos: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub visible: bool,
    pub alpha: f32,
}

/// Primary instance followed by its four ghosts
pub fn with_ghosts(primary: RenderInstance, world: WorldSize) -> [RenderInstance; GHOST_COUNT + 1] {
    let ghosts = ghost_positions(primary.pos, world);
    let mut out = [primary; GHOST_COUNT + 1];
    for (slot, pos) in out[1..].iter_mut().zip(ghosts) {
        slot.pos = pos;
    }
    out
}

pub trait RenderSink {
    fn draw(&mut self, kind: SpriteKind, instance: &RenderInstance);
}

/// Collects everything drawn (handy for tests and snapshot dumps)
impl RenderSink for Vec<(SpriteKind, RenderInstance)> {
    fn draw(&mut self, kind: SpriteKind, instance: &RenderInstance) {
        self.push((kind, *instance));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ghosts_copy_everything_but_position() {
        let world = WorldSize::new(640.0, 480.0).unwrap();
        let primary = RenderInstance {
            pos: Vec2::new(630.0, 4.0),
            rotation: 1.25,
            scale: 0.4,
            visible: true,
            alpha: 0.8,
        };
        let all = with_ghosts(primary, world);
        assert_eq!(all[0], primary);
        assert_eq!(all[1].pos, Vec2::new(630.0 - 640.0, 4.0));
        assert_eq!(all[2].pos, Vec2::new(630.0 + 640.0, 4.0));
        assert_eq!(all[3].pos, Vec2::new(630.0, 4.0 - 480.0));
        assert_eq!(all[4].pos, Vec2::new(630.0, 4.0 + 480.0));
        for ghost in &all[1..] {
            assert_eq!(ghost.rotation, primary.rotation);
            assert_eq!(ghost.scale, primary.scale);
            assert_eq!(ghost.visible, primary.visible);
            assert_eq!(ghost.alpha, primary.alpha);
        }
    }
}
