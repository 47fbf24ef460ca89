//! Engine configuration
//!
//! Rule thresholds and watering tables. Defaults are the production values;
//! a JSON file may override any subset (missing keys keep their default).
//!
//! ```json
//! { "layout": { "crowded_neighbor_count": 5 }, "rotation": { "max_suggestions": 6 } }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// All tunable rule parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub layout: LayoutRules,
    pub watering: WateringRules,
    pub rotation: RotationRules,
}

/// Thresholds for the grid spatial analyzer
///
/// One grid cell is treated as 6 inches of bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutRules {
    /// Plants at or above this spacing are checked for crowding
    pub wide_spacing_inches: u32,
    /// Occupied neighbors (of 8) that count as crowded
    pub crowded_neighbor_count: usize,
    /// Neighbors with a different water class that trigger a mismatch
    pub water_mismatch_neighbor_count: usize,
    /// Tall neighbors that shade a low, full-sun plant
    pub shading_tall_neighbor_count: usize,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            wide_spacing_inches: 18,
            crowded_neighbor_count: 6,
            water_mismatch_neighbor_count: 3,
            shading_tall_neighbor_count: 2,
        }
    }
}

/// Watering intervals and temperature bands (°F)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WateringRules {
    pub frequent_interval_days: i64,
    pub average_interval_days: i64,
    pub minimum_interval_days: i64,
    /// Used for the custom class when no explicit interval is stored
    pub custom_default_interval_days: i64,

    pub extreme_heat_f: f64,
    pub extreme_heat_adjustment_days: i64,
    pub hot_f: f64,
    pub hot_adjustment_days: i64,
    pub cool_f: f64,
    pub cool_adjustment_days: i64,

    /// Days past the interval before a plain overdue outranks the hot-day escalation
    pub overdue_grace_days: i64,
    /// Day count reported for plants never watered
    pub never_watered_days: i64,
}

impl Default for WateringRules {
    fn default() -> Self {
        Self {
            frequent_interval_days: 2,
            average_interval_days: 4,
            minimum_interval_days: 7,
            custom_default_interval_days: 4,
            extreme_heat_f: 95.0,
            extreme_heat_adjustment_days: -2,
            hot_f: 85.0,
            hot_adjustment_days: -1,
            cool_f: 65.0,
            cool_adjustment_days: 1,
            overdue_grace_days: 2,
            never_watered_days: 999,
        }
    }
}

/// Crop rotation planner limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationRules {
    pub max_suggestions: usize,
}

impl Default for RotationRules {
    fn default() -> Self {
        Self { max_suggestions: 10 }
    }
}

impl EngineConfig {
    /// Load configuration overrides from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;

        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse engine config: {:?}", path))
    }

    /// Parse configuration overrides from a JSON string
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(contents)?;
        Ok(config)
    }
}
