// Copyright 2025 Cowboy AI, LLC.

//! Run configuration
//!
//! The constants behind the apportionment and sampling steps are empirical,
//! so they are carried as data rather than code. Every field has a default;
//! a JSON document only needs to name the fields it changes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{EstimationError, EstimationResult};

/// Parameters of an estimation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EstimationConfig {
    /// Run seed; every building derives its own generator from it
    pub seed: u64,
    /// Share of the exterior wall that belongs to dwellings
    pub dwelling_wall_fraction: f64,
    /// Wall weight of a corner unit relative to an interior unit
    pub corner_wall_weight: f64,
    /// Floors with at most this many units are all corner units in
    /// semi-detached and end-of-row buildings
    pub short_row_max_units: usize,
    /// Relative tolerance of the wall-sum check
    pub wall_sum_tolerance: f64,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            dwelling_wall_fraction: 0.95,
            corner_wall_weight: 2.0,
            short_row_max_units: 3,
            wall_sum_tolerance: 1e-6,
        }
    }
}

impl EstimationConfig {
    /// Default configuration with another seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> EstimationResult<()> {
        let fraction = self.dwelling_wall_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(EstimationError::InvalidConfiguration(format!(
                "dwelling_wall_fraction must lie in (0, 1], got {fraction}"
            )));
        }
        if !(self.corner_wall_weight.is_finite() && self.corner_wall_weight > 0.0) {
            return Err(EstimationError::InvalidConfiguration(format!(
                "corner_wall_weight must be positive, got {}",
                self.corner_wall_weight
            )));
        }
        if !(self.wall_sum_tolerance.is_finite() && self.wall_sum_tolerance > 0.0) {
            return Err(EstimationError::InvalidConfiguration(format!(
                "wall_sum_tolerance must be positive, got {}",
                self.wall_sum_tolerance
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> EstimationResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
