//! Tuning knobs for the launch animation.
//!
//! Every field has a default matching the hand-tuned demo, so a TOML file only
//! needs to list the values it wants to change:
//!
//! ```toml
//! thrust = 0.0003
//! chase_offset = { x = 5.0, y = 2.0, z = 12.0 }
//! ```

use std::path::Path;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ALTITUDE_SCALE, CHASE_OFFSET, CUTOFF_VELOCITY, GRAVITY, HORIZONTAL_DRIFT_RATE,
    PARACHUTE_DESCENT_RATE, STALL_VELOCITY, THRUST,
};
use crate::errors::SimulationError;

/// Chase camera eye position relative to the tracked rocket. Missing
/// components fall back to the default `(3, 3, 10)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for ChaseOffset {
    fn default() -> Self {
        ChaseOffset::from(CHASE_OFFSET)
    }
}

impl From<[f64; 3]> for ChaseOffset {
    fn from(v: [f64; 3]) -> Self {
        ChaseOffset {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }
}

impl ChaseOffset {
    pub fn to_vector3(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Downward acceleration applied during powered ascent.
    pub gravity: f64,
    /// Nominal upward acceleration restored on every launch.
    pub thrust: f64,
    /// Vertical velocity below which the ascent is considered finished.
    pub stall_velocity: f64,
    /// Vertical velocity above which the engine cuts off for the rest of the flight.
    pub cutoff_velocity: f64,
    /// Sideways drift added each frame while ascending.
    pub horizontal_drift_rate: f64,
    /// Altitude lost each frame under parachute.
    pub parachute_descent_rate: f64,
    /// Chase camera eye offset from the tracked position.
    pub chase_offset: ChaseOffset,
    pub altitude_scale: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        FlightConfig {
            gravity: GRAVITY,
            thrust: THRUST,
            stall_velocity: STALL_VELOCITY,
            cutoff_velocity: CUTOFF_VELOCITY,
            horizontal_drift_rate: HORIZONTAL_DRIFT_RATE,
            parachute_descent_rate: PARACHUTE_DESCENT_RATE,
            chase_offset: ChaseOffset::default(),
            altitude_scale: ALTITUDE_SCALE,
        }
    }
}

impl FlightConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, SimulationError> {
        let config: FlightConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("gravity", self.gravity),
            ("thrust", self.thrust),
            ("stall_velocity", self.stall_velocity),
            ("cutoff_velocity", self.cutoff_velocity),
            ("horizontal_drift_rate", self.horizontal_drift_rate),
            ("parachute_descent_rate", self.parachute_descent_rate),
            ("chase_offset.x", self.chase_offset.x),
            ("chase_offset.y", self.chase_offset.y),
            ("chase_offset.z", self.chase_offset.z),
            ("altitude_scale", self.altitude_scale),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimulationError::InvalidConfig(format!(
                "{} must be a finite number",
                name
            )));
        }

        if self.thrust <= self.gravity {
            return Err(SimulationError::InvalidConfig(format!(
                "thrust ({}) must exceed gravity ({}) for liftoff",
                self.thrust, self.gravity
            )));
        }
        if self.stall_velocity >= self.cutoff_velocity {
            return Err(SimulationError::InvalidConfig(format!(
                "stall_velocity ({}) must be below cutoff_velocity ({})",
                self.stall_velocity, self.cutoff_velocity
            )));
        }
        if self.horizontal_drift_rate < 0.0 || self.parachute_descent_rate < 0.0 {
            return Err(SimulationError::InvalidConfig(
                "drift and descent rates cannot be negative".to_string(),
            ));
        }
        if self.altitude_scale <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "altitude_scale must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
