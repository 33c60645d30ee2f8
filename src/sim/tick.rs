//! Per-frame simulation step
//!
//! Order within a frame: rocket steering, asteroid drift, bullets and weapon,
//! then collisions against the positions everything moved to.

use super::collision::{detect_craft_collisions, resolve_bullet_hits};
use super::input::ActionQuery;
use super::scene::GameScene;
use super::state::{FrameContext, GameEvent, Updatable};
use super::world::WorldSize;
use crate::error::SimError;

impl GameScene {
    /// Advance the scene by `frames_passed` (1.0 = one ideal frame)
    ///
    /// `world` must stay the same for the whole call; it may change between
    /// calls (window resize). A negative or non-finite delta is rejected
    /// before anything moves. A delta large enough to push a body out of
    /// the real numbers is reported as an error; the scene is not usable
    /// after that. Returns the events this frame produced.
    pub fn update(
        &mut self,
        frames_passed: f32,
        input: &dyn ActionQuery,
        world: WorldSize,
    ) -> Result<&[GameEvent], SimError> {
        let dt = SimError::require_non_negative("frames_passed", frames_passed)?;

        self.world = world;
        self.events.clear();

        let ctx = FrameContext { dt, world, input };

        self.rocket.update(&ctx);
        for asteroid in &mut self.asteroids {
            asteroid.update(&ctx);
        }
        self.rocket.update_weapon(&ctx, &mut self.events);

        detect_craft_collisions(&self.rocket, &self.asteroids, &mut self.events);
        resolve_bullet_hits(&mut self.asteroids, &mut self.rocket.bullets, &mut self.events);

        self.frame_count += 1;
        self.ensure_finite(frames_passed)?;
        Ok(self.events.as_slice())
    }

    fn ensure_finite(&self, frames_passed: f32) -> Result<(), SimError> {
        let finite = self.rocket.body.is_finite()
            && self.rocket.bullets.iter().all(|b| b.body.is_finite())
            && self.asteroids.iter().all(|a| a.body.is_finite());
        if finite {
            Ok(())
        } else {
            log::error!("Frame {}: non-finite body state", self.frame_count);
            Err(SimError::invalid(
                "frames_passed",
                frames_passed,
                "step left a body with a non-finite position",
            ))
        }
    }
}
