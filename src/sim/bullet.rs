//! Pooled rocket projectile
//!
//! Bullets fly straight at a fixed speed, fade as they age and switch
//! themselves off after `max_travel_time` frames. An inactive bullet is a free
//! pool slot: not drawn, not moved, never collides.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::render::RenderInstance;
use super::state::{Collidable, FrameContext, Updatable};
use crate::tuning::BulletTuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub body: KinematicBody,
    pub active: bool,
    /// Frames travelled since firing
    pub travel_time: f32,
    pub max_travel_time: f32,
    /// Derived from travel time each frame
    pub alpha: f32,
    pub scale: f32,
    width: f32,
}

impl Bullet {
    pub fn new(tuning: &BulletTuning) -> Self {
        Self {
            body: KinematicBody {
                speed: tuning.speed,
                ..Default::default()
            },
            active: false,
            travel_time: 0.0,
            max_travel_time: tuning.max_travel_time,
            alpha: 1.0,
            scale: tuning.scale,
            width: tuning.texture_width * tuning.scale,
        }
    }

    /// Launch from `pos` along `rotation`
    pub fn start(&mut self, pos: Vec2, rotation: f32) {
        self.body.pos = pos;
        self.body.rotation = rotation;
        self.travel_time = 0.0;
        self.alpha = 1.0;
        self.active = true;
    }

    /// Return the bullet to the pool
    pub fn stop(&mut self) {
        self.active = false;
        self.travel_time = 0.0;
    }

    /// Linear fade: 1.0 at launch, 0.5 at expiry, would reach 0 at twice the lifetime
    fn fade(&self) -> f32 {
        (2.0 * self.max_travel_time - self.travel_time) / (2.0 * self.max_travel_time)
    }

    pub fn render_instance(&self) -> RenderInstance {
        RenderInstance {
            pos: self.body.pos,
            rotation: self.body.rotation,
            scale: self.scale,
            visible: self.active,
            alpha: self.alpha,
        }
    }
}

impl Updatable for Bullet {
    fn update(&mut self, ctx: &FrameContext<'_>) {
        if !self.active {
            return;
        }

        self.body.advance_facing(ctx.dt, ctx.world);

        self.travel_time += ctx.dt;
        self.alpha = self.fade();
        if self.travel_time > self.max_travel_time {
            self.stop();
        }
    }
}

impl Collidable for Bullet {
    fn collision_center(&self) -> Vec2 {
        self.body.pos
    }

    fn collision_width(&self) -> f32 {
        self.width
    }

    fn is_collidable(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::ActionSet;
    use crate::sim::world::WorldSize;

    fn ctx(input: &ActionSet, dt: f32) -> FrameContext<'_> {
        FrameContext {
            dt,
            world: WorldSize::new(1000.0, 800.0).unwrap(),
            input,
        }
    }

    #[test]
    fn test_inactive_bullet_does_not_move() {
        let mut bullet = Bullet::new(&BulletTuning::default());
        let input = ActionSet::none();
        bullet.update(&ctx(&input, 1.0));
        assert_eq!(bullet.body.pos, Vec2::ZERO);
        assert!(!bullet.is_collidable());
    }

    #[test]
    fn test_flies_along_heading() {
        let mut bullet = Bullet::new(&BulletTuning::default());
        bullet.start(Vec2::new(500.0, 400.0), 0.0);
        let input = ActionSet::none();
        bullet.update(&ctx(&input, 1.0));
        assert!((bullet.body.pos.y - 350.0).abs() < 1e-3);
        assert!((bullet.body.pos.x - 500.0).abs() < 1e-3);
        assert_eq!(bullet.body.rotation, 0.0);
    }

    #[test]
    fn test_lifecycle_and_fade() {
        let mut bullet = Bullet::new(&BulletTuning::default());
        bullet.start(Vec2::new(500.0, 400.0), 1.0);
        assert!(bullet.active);
        assert_eq!(bullet.alpha, 1.0);

        let input = ActionSet::none();
        let mut last_alpha = bullet.alpha;
        // Still live at exactly max_travel_time
        for _ in 0..15 {
            bullet.update(&ctx(&input, 1.0));
            assert!(bullet.active);
            assert!(bullet.alpha < last_alpha);
            assert!(bullet.alpha > 0.0);
            last_alpha = bullet.alpha;
        }
        assert_eq!(bullet.travel_time, 15.0);

        bullet.update(&ctx(&input, 1.0));
        assert!(!bullet.active);
        assert_eq!(bullet.travel_time, 0.0);
        assert!(!bullet.render_instance().visible);
    }

    #[test]
    fn test_fractional_frames() {
        let mut bullet = Bullet::new(&BulletTuning::default());
        bullet.start(Vec2::new(100.0, 100.0), 0.0);
        let input = ActionSet::none();
        for _ in 0..30 {
            bullet.update(&ctx(&input, 0.5));
        }
        assert!(bullet.active);
        bullet.update(&ctx(&input, 0.25));
        assert!(!bullet.active);
    }

    #[test]
    fn test_restart_resets_age() {
        let mut bullet = Bullet::new(&BulletTuning::default());
        bullet.start(Vec2::new(100.0, 100.0), 0.0);
        let input = ActionSet::none();
        bullet.update(&ctx(&input, 5.0));
        bullet.start(Vec2::new(200.0, 200.0), 2.0);
        assert_eq!(bullet.travel_time, 0.0);
        assert_eq!(bullet.alpha, 1.0);
        assert_eq!(bullet.body.pos, Vec2::new(200.0, 200.0));
    }
}
