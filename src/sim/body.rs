//! Kinematic body shared by every moving entity
//!
//! Heading 0 points up the screen and angles grow clockwise, so a body moving
//! at `speed` along `heading` advances by `(sin h, -cos h) * speed * dt`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::world::WorldSize;
use crate::consts::REVERSE_FACTOR;
use crate::{clamp, heading_vector};

/// Friction constants (deceleration per frame)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Friction {
    pub linear: f32,
    pub angular: f32,
}

/// Speed caps for bodies under player control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionLimits {
    /// Forward cap; reverse is capped at `max_speed * REVERSE_FACTOR`
    pub max_speed: f32,
    pub max_angular_speed: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub pos: Vec2,
    /// Radians, unbounded
    pub rotation: f32,
    pub speed: f32,
    /// Rebuilt every frame, not carried over
    pub acceleration: f32,
    pub angular_speed: f32,
    pub angular_acceleration: f32,
}

impl KinematicBody {
    pub fn at(pos: Vec2, rotation: f32) -> Self {
        Self {
            pos,
            rotation,
            ..Default::default()
        }
    }

    /// Reset accelerations to the friction response
    ///
    /// A speed at or below the friction constant stops dead instead of
    /// creeping toward zero.
    pub fn apply_friction(&mut self, friction: Friction) {
        if self.speed.abs() > friction.linear {
            self.acceleration = -self.speed.signum() * friction.linear;
        } else {
            self.acceleration = 0.0;
            self.speed = 0.0;
        }

        if self.angular_speed.abs() > friction.angular {
            self.angular_acceleration = -self.angular_speed.signum() * friction.angular;
        } else {
            self.angular_acceleration = 0.0;
            self.angular_speed = 0.0;
        }
    }

    /// v += a * dt, clamped to the limits
    pub fn integrate_velocity(&mut self, dt: f32, limits: MotionLimits) {
        self.speed = clamp(
            self.speed + self.acceleration * dt,
            -limits.max_speed * REVERSE_FACTOR,
            limits.max_speed,
        );
        self.angular_speed = clamp(
            self.angular_speed + self.angular_acceleration * dt,
            -limits.max_angular_speed,
            limits.max_angular_speed,
        );
    }

    /// pos += v * dt along `heading`, then spin and wrap
    pub fn advance(&mut self, heading: f32, dt: f32, world: WorldSize) {
        self.pos += heading_vector(heading) * self.speed * dt;
        self.rotation += self.angular_speed * dt;
        self.pos = world.wrap_point(self.pos);
    }

    /// Position and rotation are both real numbers
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.rotation.is_finite()
    }

    /// Advance along the body's own rotation
    pub fn advance_facing(&mut self, dt: f32, world: WorldSize) {
        self.advance(self.rotation, dt, world);
    }
}
