use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("interaction config is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("interaction config field {field} must be finite and non-negative, got {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

/// Tuning values for the stacking, drag and probe models.
///
/// Passed explicitly into every model function so a scene or a test can vary
/// them without touching shared state. Every field has a default, so a JSON
/// config only needs to name what it overrides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionConfig {
    /// Max gap between a base's top and a candidate's bottom to count as resting
    pub vertical_tolerance: f32,
    /// Fraction of the summed interaction radii two centers must be within
    pub footprint_factor: f32,
    /// Interaction radius = height * radius_height_factor + radius_padding
    pub radius_height_factor: f32,
    pub radius_padding: f32,
    pub resistance_gain: f32,
    pub resistance_ceiling: f32,
    /// Added to the base weight before dividing
    pub resistance_epsilon: f32,
    pub stacking_friction: f32,
    /// Interface friction at or above which a dependent rides along rigidly
    pub slip_threshold: f32,
    /// Minimum probe-to-collider distance that still counts as a hit
    pub probe_epsilon: f32,
    pub desk_surface_y: f32,
    /// Enforce `noStackingOnTop` in direct-support detection
    pub respect_no_stacking_on_top: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            vertical_tolerance: 0.15,
            footprint_factor: 0.7,
            radius_height_factor: 0.5,
            radius_padding: 0.2,
            resistance_gain: 0.4,
            resistance_ceiling: 0.8,
            resistance_epsilon: 0.1,
            stacking_friction: 0.7,
            slip_threshold: 0.3,
            probe_epsilon: 0.01,
            desk_surface_y: 0.0,
            respect_no_stacking_on_top: false,
        }
    }
}

impl InteractionConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("verticalTolerance", self.vertical_tolerance),
            ("footprintFactor", self.footprint_factor),
            ("radiusHeightFactor", self.radius_height_factor),
            ("radiusPadding", self.radius_padding),
            ("resistanceGain", self.resistance_gain),
            ("resistanceCeiling", self.resistance_ceiling),
            ("resistanceEpsilon", self.resistance_epsilon),
            ("stackingFriction", self.stacking_friction),
            ("slipThreshold", self.slip_threshold),
            ("probeEpsilon", self.probe_epsilon),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }

    /// Heuristic footprint radius from profile height. Not true bounding geometry.
    #[inline]
    pub fn interaction_radius(&self, height: f32) -> f32 {
        height * self.radius_height_factor + self.radius_padding
    }
}
