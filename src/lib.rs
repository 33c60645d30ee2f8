//! Toroid Rocket - A wraparound-arena asteroid shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, wrapping, weapons, collisions)
//! - `tuning`: Data-driven game balance
//! - `error`: Crate error type

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame delta (one ideal display frame)
    pub const FRAME_DT: f32 = 1.0;

    /// Default arena dimensions
    pub const WORLD_WIDTH: f32 = 1920.0;
    pub const WORLD_HEIGHT: f32 = 1080.0;

    /// Reverse thrust is this fraction of forward thrust, and reverse speed
    /// is capped at this fraction of max speed
    pub const REVERSE_FACTOR: f32 = 0.5;

    /// Number of ghost copies drawn around a wrapping entity
    pub const GHOST_COUNT: usize = 4;

    /// Asteroids in play at scene start
    pub const ASTEROID_COUNT: usize = 5;
}

/// Clamp without panicking on inverted bounds (upper bound wins)
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Unit heading vector for a screen-space angle (0 = up, clockwise positive)
#[inline]
pub fn heading_vector(angle: f32) -> glam::Vec2 {
    glam::Vec2::new(angle.sin(), -angle.cos())
}
