//! Garden Engine - main coordinator for the rule evaluators
//!
//! Owns the reference catalogs and rule configuration and exposes every
//! evaluator over them. Includes both per-plant and parallel (Rayon) tracker
//! evaluation.

use crate::config::EngineConfig;
use crate::data::GardenCatalogs;
use crate::error::EngineResult;
use crate::layout::{
    summarize, CompatibilityResolver, GridSpatialAnalyzer, LayoutAlert, LayoutSummary, PlantingGrid,
};
use crate::rotation::{RotationAdvice, RotationPlanner};
use crate::tracker::{
    advise_watering, evaluate_growth, GrowthReport, TrackedPlantState, WateringReport, WeatherReading,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main garden engine
#[derive(Debug, Clone, Default)]
pub struct GardenEngine {
    catalogs: GardenCatalogs,
    config: EngineConfig,
}

/// Tracker view of one plant
///
/// Planned plants (no planted date) carry neither report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerCard {
    pub plant_name: String,
    pub planted: bool,
    pub growth: Option<GrowthReport>,
    pub watering: Option<WateringReport>,
}

impl GardenEngine {
    pub fn new(catalogs: GardenCatalogs, config: EngineConfig) -> Self {
        Self { catalogs, config }
    }

    /// Load catalogs from `data_dir` and optional config overrides
    pub fn load(data_dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        info!("Initializing Garden Engine...");

        let config = match config_path {
            Some(path) => {
                info!("Loading engine config: {:?}", path);
                EngineConfig::load(path)?
            }
            None => EngineConfig::default(),
        };

        let catalogs = GardenCatalogs::load(data_dir)?;

        info!(
            requirements = catalogs.requirements.len(),
            companions = catalogs.companions.len(),
            "Garden Engine initialized"
        );

        Ok(Self::new(catalogs, config))
    }

    pub fn catalogs(&self) -> &GardenCatalogs {
        &self.catalogs
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn resolver(&self) -> CompatibilityResolver<'_> {
        CompatibilityResolver::new(&self.catalogs.companions)
    }

    /// Layout alerts for a bed
    pub fn analyze_layout(&self, grid: &PlantingGrid) -> Vec<LayoutAlert> {
        GridSpatialAnalyzer::new(
            &self.catalogs.requirements,
            &self.catalogs.companions,
            &self.config.layout,
        )
        .analyze(grid)
    }

    /// Layout alerts plus their summary counts
    pub fn layout_summary(&self, grid: &PlantingGrid) -> (Vec<LayoutAlert>, LayoutSummary) {
        let alerts = self.analyze_layout(grid);
        let summary = summarize(&alerts);
        (alerts, summary)
    }

    pub fn growth_stage(&self, state: &TrackedPlantState, now: DateTime<Utc>) -> EngineResult<GrowthReport> {
        evaluate_growth(state, now)
    }

    pub fn watering_status(
        &self,
        state: &TrackedPlantState,
        weather: &WeatherReading,
        now: DateTime<Utc>,
    ) -> WateringReport {
        advise_watering(state, weather, now, &self.config.watering)
    }

    pub fn rotation_advice(&self, candidate: &str, previous: &[String]) -> RotationAdvice {
        RotationPlanner::new(&self.catalogs.companions, &self.config.rotation).advise(candidate, previous)
    }

    /// Companion suggestions for (row, col) given its occupied neighbors
    pub fn suggest_for_cell(&self, grid: &PlantingGrid, row: usize, col: usize) -> Vec<String> {
        let neighbors = grid.neighbors(row, col);
        let names: Vec<&str> = neighbors.iter().map(|(_, plant)| plant.lookup_key()).collect();
        self.resolver().suggest_companions(&names)
    }

    /// Growth and watering for one tracked plant
    pub fn tracker_card(
        &self,
        state: &TrackedPlantState,
        weather: &WeatherReading,
        now: DateTime<Utc>,
    ) -> TrackerCard {
        // Planned plants have nothing to grow or water yet
        let growth = self.growth_stage(state, now).ok();
        let watering = growth
            .as_ref()
            .map(|_| self.watering_status(state, weather, now));

        TrackerCard {
            plant_name: state.plant_name.clone(),
            planted: state.is_planted(),
            growth,
            watering,
        }
    }

    /// Evaluate tracker cards in parallel, preserving input order
    pub fn evaluate_tracker(
        &self,
        plants: &[TrackedPlantState],
        weather: &WeatherReading,
        now: DateTime<Utc>,
    ) -> Vec<TrackerCard> {
        let cards: Vec<TrackerCard> = plants
            .par_iter()
            .map(|state| self.tracker_card(state, weather, now))
            .collect();

        debug!(
            plants = cards.len(),
            planted = cards.iter().filter(|c| c.planted).count(),
            "tracker evaluated"
        );

        cards
    }
}
