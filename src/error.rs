//! Simulation error types
//!
//! The simulation is a closed, fixed-resource system. The only failures that
//! reach callers are contract violations on inputs (world size, frame delta,
//! tuning values) and problems reading a tuning file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A numeric argument was out of its valid range (non-positive world
    /// dimension, negative or non-finite frame delta, bad tuning value)
    #[error("invalid argument `{name}`: {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub fn invalid(name: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            value,
            reason,
        }
    }

    /// Fail unless `value` is finite and strictly positive
    pub fn require_positive(name: &'static str, value: f32) -> Result<f32, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::invalid(name, value, "must be finite and > 0"))
        }
    }

    /// Fail unless `value` is finite and not negative
    pub fn require_non_negative(name: &'static str, value: f32) -> Result<f32, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::invalid(name, value, "must be finite and >= 0"))
        }
    }
}
