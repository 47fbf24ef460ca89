//! Growth stage engine
//!
//! Maps days since planting to a stage name and harvest progress.
//!
//! The stage comes from the plant's own milestone table: the last milestone
//! whose `estimated_days` has passed (or the first milestone if none has).
//! Records without milestones fall back to a fixed day-threshold table.
//!
//! Stored stage names drifted over time ("flowering", "vegetative growth",
//! "Early flowering", ...); all of them collapse to one canonical label.

use super::state::{Milestone, TrackedPlantState};
use crate::error::{EngineError, EngineResult};
use crate::utils::{clamp_day_count, elapsed_days};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const GERMINATION_STAGE: &str = "Germination";
pub const SEEDLING_STAGE: &str = "Seedling";
pub const VEGETATIVE_FLOWERING_STAGE: &str = "vegetative growth/flowering";
pub const READY_TO_HARVEST_STAGE: &str = "Ready to Harvest";

/// Fixed-threshold fallback boundaries (days)
const GERMINATION_END_DAYS: f64 = 7.0;
const SEEDLING_END_DAYS: f64 = 24.5;
const VEGETATIVE_END_DAYS: f64 = 66.5;

/// Which table produced the stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageSource {
    Milestones,
    FixedThresholds,
}

/// Upcoming milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextMilestone {
    pub name: String,
    pub days_away: i64,
}

/// Growth progress for one tracked plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthReport {
    pub days_passed: i64,
    /// 0..=100
    pub percent_complete: f64,
    pub stage: String,
    pub stage_source: StageSource,
    pub harvest_ready: bool,
    pub days_until_harvest: i64,
    pub next_milestone: Option<NextMilestone>,
    pub milestones_reached: usize,
}

/// Collapse historical flowering/vegetative names to the canonical label
pub fn normalize_stage_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    if lowered == "vegetative growth" || lowered.contains("flowering") {
        VEGETATIVE_FLOWERING_STAGE.to_string()
    } else {
        name.trim().to_string()
    }
}

/// Stage from the milestone table; None when the table is empty
///
/// Assumes ascending `estimated_days`.
pub fn stage_from_milestones(milestones: &[Milestone], days_passed: i64) -> Option<String> {
    let first = milestones.first()?;
    let days = days_passed as f64;

    let current = milestones
        .iter()
        .take_while(|m| clamp_day_count(m.estimated_days) <= days)
        .last()
        .unwrap_or(first);

    Some(normalize_stage_name(&current.name))
}

/// Stage from fixed day thresholds, for records without milestones
///
/// The early-stage thresholds are checked before harvest readiness.
pub fn fixed_threshold_stage(days_passed: i64, days_to_harvest: f64) -> &'static str {
    let days = days_passed as f64;
    if days < GERMINATION_END_DAYS {
        GERMINATION_STAGE
    } else if days < SEEDLING_END_DAYS {
        SEEDLING_STAGE
    } else if days < VEGETATIVE_END_DAYS {
        VEGETATIVE_FLOWERING_STAGE
    } else if days >= days_to_harvest {
        READY_TO_HARVEST_STAGE
    } else {
        VEGETATIVE_FLOWERING_STAGE
    }
}

/// Evaluate growth progress at `now`
///
/// Fails with `NotPlanted` when the plant has no planted date.
pub fn evaluate_growth(state: &TrackedPlantState, now: DateTime<Utc>) -> EngineResult<GrowthReport> {
    let planted = state.planted_date.ok_or_else(|| EngineError::NotPlanted {
        plant: state.plant_name.clone(),
    })?;

    let days_passed = elapsed_days(planted, now);
    let days = days_passed as f64;
    let days_to_harvest = clamp_day_count(state.days_to_harvest);

    // A missing or zero harvest horizon reads as "nothing left to wait for"
    let (percent_complete, harvest_ready) = if days_to_harvest > 0.0 {
        ((days / days_to_harvest * 100.0).min(100.0), days >= days_to_harvest)
    } else {
        (100.0, true)
    };

    let (stage, stage_source) = match stage_from_milestones(&state.milestones, days_passed) {
        Some(stage) => (stage, StageSource::Milestones),
        None => (
            fixed_threshold_stage(days_passed, days_to_harvest).to_string(),
            StageSource::FixedThresholds,
        ),
    };

    let next_milestone = state
        .milestones
        .iter()
        .find(|m| clamp_day_count(m.estimated_days) > days)
        .map(|m| NextMilestone {
            name: normalize_stage_name(&m.name),
            days_away: (clamp_day_count(m.estimated_days) - days).ceil() as i64,
        });

    Ok(GrowthReport {
        days_passed,
        percent_complete,
        stage,
        stage_source,
        harvest_ready,
        days_until_harvest: (days_to_harvest - days).max(0.0).ceil() as i64,
        next_milestone,
        milestones_reached: state.milestones.iter().filter(|m| m.reached).count(),
    })
}
