//! Game scene: the rocket and the asteroid field
//!
//! All state one play session needs. The per-frame step lives in `tick.rs`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::render::{RenderSink, SpriteKind};
use super::rocket::Rocket;
use super::state::{GameEvent, RandomSource, seeded_rng};
use super::world::WorldSize;
use crate::error::SimError;
use crate::tuning::Tuning;

/// Most events one frame can produce: a shot, a reload start and finish,
/// plus one contact and one kill per asteroid
fn event_capacity(asteroids: usize) -> usize {
    3 + 2 * asteroids
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameScene {
    pub rocket: Rocket,
    /// Fixed set; destroyed asteroids stay in place, inactive
    pub asteroids: Vec<Asteroid>,
    /// Frames stepped so far
    pub frame_count: u64,
    /// World size seen by the most recent step
    pub(super) world: WorldSize,
    /// Events from the most recent step
    #[serde(skip)]
    pub(super) events: Vec<GameEvent>,
}

impl GameScene {
    /// Build a scene: rocket centred, asteroids scattered along the seams
    pub fn new(tuning: &Tuning, world: WorldSize, rng: &mut dyn RandomSource) -> Result<Self, SimError> {
        tuning.validate()?;

        let rocket = Rocket::new(tuning, world);
        let asteroids = (0..tuning.asteroid.count)
            .map(|_| {
                let mut asteroid = Asteroid::new(&tuning.asteroid);
                let pos = seam_point(world, rng);
                asteroid.start(pos, rng);
                asteroid
            })
            .collect::<Vec<_>>();

        log::info!(
            "Scene ready: {}x{} world, {} asteroids, {} rounds",
            world.width(),
            world.height(),
            asteroids.len(),
            rocket.max_ammo()
        );

        Ok(Self {
            rocket,
            asteroids,
            frame_count: 0,
            world,
            events: Vec::with_capacity(event_capacity(tuning.asteroid.count)),
        })
    }

    /// Build a scene from a seeded PCG stream
    pub fn with_seed(tuning: &Tuning, world: WorldSize, seed: u64) -> Result<Self, SimError> {
        let mut rng = seeded_rng(seed);
        log::info!("Seeding scene with {}", seed);
        Self::new(tuning, world, &mut rng)
    }

    pub fn world(&self) -> WorldSize {
        self.world
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn active_asteroids(&self) -> usize {
        self.asteroids.iter().filter(|a| a.active).count()
    }

    /// Push every sprite (primaries and ghosts) into `sink`
    ///
    /// Inactive entities are included with `visible == false`.
    pub fn present(&self, sink: &mut dyn RenderSink) {
        for bullet in &self.rocket.bullets {
            sink.draw(SpriteKind::Bullet, &bullet.render_instance());
        }
        for asteroid in &self.asteroids {
            for instance in &asteroid.render_instances(self.world) {
                sink.draw(SpriteKind::Asteroid, instance);
            }
        }
        for instance in &self.rocket.render_instances(self.world) {
            sink.draw(SpriteKind::Rocket, instance);
        }
    }
}

/// Random point on the left or top seam, away from the centred rocket
fn seam_point(world: WorldSize, rng: &mut dyn RandomSource) -> Vec2 {
    if rng.uniform(0.0, 1.0) < 0.5 {
        Vec2::new(0.0, rng.uniform(0.0, world.height()))
    } else {
        Vec2::new(rng.uniform(0.0, world.width()), 0.0)
    }
}
