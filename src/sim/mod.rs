//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - Single-threaded, one step runs to completion before the next
//! - World size and input are passed in, never read from globals
//! - Pools are allocated up front; no allocation in the steady state
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod body;
pub mod bullet;
pub mod collision;
pub mod input;
pub mod render;
pub mod rocket;
pub mod scene;
pub mod state;
pub mod tick;
pub mod world;

pub use asteroid::Asteroid;
pub use body::{Friction, KinematicBody, MotionLimits};
pub use bullet::Bullet;
pub use collision::circles_overlap;
pub use input::{Action, ActionQuery, ActionSet, KeyboardState, default_bindings};
pub use render::{RenderInstance, RenderSink, SpriteKind, with_ghosts};
pub use rocket::{Rocket, WeaponState};
pub use scene::GameScene;
pub use state::{Collidable, FrameContext, GameEvent, RandomSource, Updatable, seeded_rng};
pub use world::{WorldSize, ghost_positions, wrap};
