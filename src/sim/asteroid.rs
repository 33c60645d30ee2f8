//! Drifting asteroid
//!
//! Each activation rolls a new size, travel direction, speed and spin. The
//! asteroid then drifts in a straight line (no friction) while spinning, and
//! wraps around the arena until a bullet stops it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::render::{RenderInstance, with_ghosts};
use super::state::{Collidable, FrameContext, RandomSource, Updatable};
use super::world::WorldSize;
use crate::consts::GHOST_COUNT;
use crate::tuning::AsteroidTuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: KinematicBody,
    /// Travel direction, fixed per activation (independent of spin)
    pub direction: f32,
    pub scale: f32,
    pub active: bool,
    tuning: AsteroidTuning,
}

impl Asteroid {
    pub fn new(tuning: &AsteroidTuning) -> Self {
        Self {
            body: KinematicBody::default(),
            direction: 0.0,
            scale: tuning.min_scale,
            active: false,
            tuning: tuning.clone(),
        }
    }

    /// Place at `pos`, roll fresh motion parameters and activate
    pub fn start(&mut self, pos: Vec2, rng: &mut dyn RandomSource) {
        let t = &self.tuning;
        self.scale = rng.uniform(t.min_scale, t.max_scale);
        self.direction = rng.uniform(0.0, std::f32::consts::TAU);
        self.body = KinematicBody {
            pos,
            rotation: self.body.rotation,
            speed: rng.uniform(t.min_speed, t.max_speed),
            angular_speed: rng.uniform(t.min_angular_speed, t.max_angular_speed),
            ..Default::default()
        };
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn width(&self) -> f32 {
        self.tuning.texture_width * self.scale
    }

    /// Primary sprite plus ghosts on the far side of each seam
    pub fn render_instances(&self, world: WorldSize) -> [RenderInstance; GHOST_COUNT + 1] {
        with_ghosts(
            RenderInstance {
                pos: self.body.pos,
                rotation: self.body.rotation,
                scale: self.scale,
                visible: self.active,
                alpha: 1.0,
            },
            world,
        )
    }
}

impl Updatable for Asteroid {
    fn update(&mut self, ctx: &FrameContext<'_>) {
        if !self.active {
            return;
        }
        self.body.advance(self.direction, ctx.dt, ctx.world);
    }
}

impl Collidable for Asteroid {
    fn collision_center(&self) -> Vec2 {
        self.body.pos
    }

    fn collision_width(&self) -> f32 {
        self.width()
    }

    fn is_collidable(&self) -> bool {
        self.active
    }
}
