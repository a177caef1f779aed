//! Controller configuration.
//!
//! Everything is supplied at construction and never changes afterwards.
//! Missing JSON fields fall back to the reference scenario.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// A scripted arrival: spawn one aircraft once the tick counter reaches `at_tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledArrival {
    pub at_tick: u64,
    /// Perimeter angle (radians); random when absent.
    #[serde(default)]
    pub bearing: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtcConfig {
    /// System name, used in the display string.
    pub name: String,
    pub zone_radius: f64,
    pub holding_radius: f64,
    pub runway_count: u32,
    pub runway_width: f64,
    pub runway_length: f64,
    pub runway_spacing: f64,
    pub aircraft_speed: f64,
    pub transmit_rate_hz: f64,
    pub collision_threshold: f64,
    /// Optional cap on simultaneously active aircraft.
    pub max_aircraft: Option<usize>,
    /// RNG seed. Same seed and inputs = same simulation.
    pub seed: u64,
    pub traffic: Vec<ScheduledArrival>,
}

impl Default for AtcConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            zone_radius: DEFAULT_ZONE_RADIUS,
            holding_radius: DEFAULT_HOLDING_RADIUS,
            runway_count: DEFAULT_RUNWAY_COUNT,
            runway_width: DEFAULT_RUNWAY_WIDTH,
            runway_length: DEFAULT_RUNWAY_LENGTH,
            runway_spacing: DEFAULT_RUNWAY_SPACING,
            aircraft_speed: DEFAULT_AIRCRAFT_SPEED,
            transmit_rate_hz: DEFAULT_TRANSMIT_RATE_HZ,
            collision_threshold: DEFAULT_COLLISION_THRESHOLD,
            max_aircraft: None,
            seed: DEFAULT_SEED,
            traffic: Vec::new(),
        }
    }
}

impl AtcConfig {
    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.transmit_rate_hz
    }

    /// Check that the configuration describes a usable zone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runway_count == 0 {
            return Err(ConfigError::NoRunways);
        }

        let positive = [
            ("zone_radius", self.zone_radius),
            ("holding_radius", self.holding_radius),
            ("runway_width", self.runway_width),
            ("runway_length", self.runway_length),
            ("aircraft_speed", self.aircraft_speed),
            ("transmit_rate_hz", self.transmit_rate_hz),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("runway_spacing", self.runway_spacing),
            ("collision_threshold", self.collision_threshold),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.max_aircraft == Some(0) {
            return Err(ConfigError::ZeroCap);
        }

        Ok(())
    }
}
