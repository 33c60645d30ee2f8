//! Toroidal world geometry
//!
//! The arena is the rectangle [0, width) x [0, height) with opposite edges
//! glued together. Entities near a seam are drawn a second time on the far
//! side through ghost copies offset by one world width/height.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::GHOST_COUNT;
use crate::error::SimError;

/// Map `value` into [0, modulus)
///
/// Works for any sign of `value`. `modulus` must be finite and > 0.
pub fn wrap(value: f32, modulus: f32) -> Result<f32, SimError> {
    let modulus = SimError::require_positive("modulus", modulus)?;
    Ok(wrap_unchecked(value, modulus))
}

/// ((v mod m) + m) mod m, without the rounding of the extra add when `v`
/// is already in range
#[inline]
fn wrap_unchecked(value: f32, modulus: f32) -> f32 {
    let rem = value % modulus;
    if rem < 0.0 {
        let shifted = rem + modulus;
        // a tiny negative remainder can round up to the modulus itself
        if shifted < modulus { shifted } else { 0.0 }
    } else {
        // normalise -0.0
        rem + 0.0
    }
}

/// Validated arena size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldSize {
    width: f32,
    height: f32,
}

impl WorldSize {
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        Ok(Self {
            width: SimError::require_positive("width", width)?,
            height: SimError::require_positive("height", height)?,
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a position into the arena
    #[inline]
    pub fn wrap_point(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            wrap_unchecked(pos.x, self.width),
            wrap_unchecked(pos.y, self.height),
        )
    }
}

/// Ghost positions around a wrapped primary position
///
/// Order: left, right, above, below.
pub fn ghost_positions(pos: Vec2, world: WorldSize) -> [Vec2; GHOST_COUNT] {
    [
        Vec2::new(pos.x - world.width, pos.y),
        Vec2::new(pos.x + world.width, pos.y),
        Vec2::new(pos.x, pos.y - world.height),
        Vec2::new(pos.x, pos.y + world.height),
    ]
}
