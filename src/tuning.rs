//! Gameplay tuning
//!
//! Every balance constant lives here. Defaults match the shipped game; a JSON
//! file can override any subset of keys (missing keys keep their default).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::ASTEROID_COUNT;
use crate::error::SimError;

/// Player rocket handling and weapon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketTuning {
    /// Forward speed cap (reverse is capped at half of this)
    pub max_speed: f32,
    /// Linear acceleration applied while thrusting forward
    pub acceleration_boost: f32,
    /// Angular speed cap (radians per frame)
    pub max_angular_speed: f32,
    /// Angular acceleration applied while turning
    pub rotation_boost: f32,
    /// Linear friction (deceleration per frame)
    pub friction: f32,
    /// Angular friction
    pub angular_friction: f32,
    /// Frames between shots
    pub shoot_time: f32,
    /// Frames to refill an empty magazine
    pub reload_time: f32,
    /// Magazine size, also the bullet pool size
    pub max_ammo: u32,
    pub scale: f32,
    /// Unscaled sprite width
    pub texture_width: f32,
}

impl Default for RocketTuning {
    fn default() -> Self {
        Self {
            max_speed: 10.0,
            acceleration_boost: 0.5,
            max_angular_speed: 0.075,
            rotation_boost: 0.01,
            friction: 0.1,
            angular_friction: 0.0025,
            shoot_time: 5.0,
            reload_time: 120.0,
            max_ammo: 50,
            scale: 0.25,
            texture_width: 128.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    pub speed: f32,
    /// Frames a bullet stays live after firing
    pub max_travel_time: f32,
    pub scale: f32,
    pub texture_width: f32,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: 50.0,
            max_travel_time: 15.0,
            scale: 0.1,
            texture_width: 64.0,
        }
    }
}

/// Asteroid spawn ranges (each drawn uniformly on activation)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    pub count: usize,
    pub min_scale: f32,
    pub max_scale: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_angular_speed: f32,
    pub max_angular_speed: f32,
    pub texture_width: f32,
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            count: ASTEROID_COUNT,
            min_scale: 0.25,
            max_scale: 0.5,
            min_speed: 3.0,
            max_speed: 5.0,
            min_angular_speed: 0.01,
            max_angular_speed: 0.05,
            texture_width: 256.0,
        }
    }
}

/// Complete game tuning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub rocket: RocketTuning,
    pub bullet: BulletTuning,
    pub asteroid: AsteroidTuning,
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), SimError> {
        let r = &self.rocket;
        SimError::require_positive("rocket.max_speed", r.max_speed)?;
        SimError::require_non_negative("rocket.acceleration_boost", r.acceleration_boost)?;
        SimError::require_positive("rocket.max_angular_speed", r.max_angular_speed)?;
        SimError::require_non_negative("rocket.rotation_boost", r.rotation_boost)?;
        SimError::require_positive("rocket.friction", r.friction)?;
        SimError::require_positive("rocket.angular_friction", r.angular_friction)?;
        SimError::require_non_negative("rocket.shoot_time", r.shoot_time)?;
        SimError::require_non_negative("rocket.reload_time", r.reload_time)?;
        if r.max_ammo == 0 {
            return Err(SimError::invalid("rocket.max_ammo", 0.0, "must be >= 1"));
        }
        SimError::require_positive("rocket.scale", r.scale)?;
        SimError::require_positive("rocket.texture_width", r.texture_width)?;

        let b = &self.bullet;
        SimError::require_non_negative("bullet.speed", b.speed)?;
        SimError::require_positive("bullet.max_travel_time", b.max_travel_time)?;
        SimError::require_positive("bullet.scale", b.scale)?;
        SimError::require_positive("bullet.texture_width", b.texture_width)?;

        let a = &self.asteroid;
        require_range("asteroid.scale", a.min_scale, a.max_scale)?;
        SimError::require_positive("asteroid.min_scale", a.min_scale)?;
        require_range("asteroid.speed", a.min_speed, a.max_speed)?;
        SimError::require_non_negative("asteroid.min_speed", a.min_speed)?;
        require_range("asteroid.angular_speed", a.min_angular_speed, a.max_angular_speed)?;
        SimError::require_positive("asteroid.texture_width", a.texture_width)?;

        Ok(())
    }
}

/// Both bounds finite and `min <= max`
fn require_range(name: &'static str, min: f32, max: f32) -> Result<(), SimError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(SimError::invalid(name, min, "range bounds must be finite"));
    }
    if min > max {
        return Err(SimError::invalid(name, min, "min must not exceed max"));
    }
    Ok(())
}
