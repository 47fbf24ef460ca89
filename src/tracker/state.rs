//! Tracked plant records
//!
//! Owned by the persistence layer; the evaluators only read them. The small
//! set of mutations here (planting, logging a watering, toggling a
//! milestone) is what the tracker screen performs before saving.

use crate::error::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often a plant is watered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WateringFrequency {
    Frequent,
    #[default]
    Average,
    Minimum,
    /// Uses the record's explicit interval
    Custom,
}

/// A named growth checkpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    /// Expected days after planting (>= 0)
    pub estimated_days: f64,
    #[serde(default)]
    pub reached: bool,
    #[serde(default)]
    pub reached_date: Option<DateTime<Utc>>,
}

impl Milestone {
    pub fn new(name: impl Into<String>, estimated_days: f64) -> Self {
        Self {
            name: name.into(),
            estimated_days,
            reached: false,
            reached_date: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// One plant being tracked from seed to harvest
///
/// `milestones` must be ordered by ascending `estimated_days`; the stage
/// lookup relies on it and does not re-sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedPlantState {
    /// Catalog key / display name
    pub plant_name: String,
    /// None while the plant is only planned
    #[serde(default)]
    pub planted_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub watering_frequency: WateringFrequency,
    /// Explicit interval; overrides the frequency class when positive
    #[serde(default)]
    pub watering_interval_days: Option<f64>,
    #[serde(default)]
    pub last_watered_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    pub days_to_harvest: f64,
    /// Caller-owned reminder switch, AND-ed into watering notifications
    #[serde(default = "default_true")]
    pub reminders_enabled: bool,
}

impl TrackedPlantState {
    /// A planned (not yet planted) plant with default watering
    pub fn new(plant_name: impl Into<String>, days_to_harvest: f64) -> Self {
        Self {
            plant_name: plant_name.into(),
            planted_date: None,
            watering_frequency: WateringFrequency::default(),
            watering_interval_days: None,
            last_watered_date: None,
            milestones: Vec::new(),
            days_to_harvest,
            reminders_enabled: true,
        }
    }

    pub fn with_milestones(mut self, milestones: Vec<Milestone>) -> Self {
        self.milestones = milestones;
        self
    }

    pub fn with_watering(mut self, frequency: WateringFrequency, interval_days: Option<f64>) -> Self {
        self.watering_frequency = frequency;
        self.watering_interval_days = interval_days;
        self
    }

    pub fn is_planted(&self) -> bool {
        self.planted_date.is_some()
    }

    /// Put the plant in the soil
    pub fn plant(&mut self, at: DateTime<Utc>) {
        self.planted_date = Some(at);
    }

    /// Log a watering
    pub fn record_watering(&mut self, at: DateTime<Utc>) {
        self.last_watered_date = Some(at);
    }

    /// Flip a milestone's reached flag, stamping or clearing its date
    pub fn toggle_milestone(&mut self, index: usize, at: DateTime<Utc>) -> EngineResult<&Milestone> {
        let len = self.milestones.len();
        let milestone = self
            .milestones
            .get_mut(index)
            .ok_or(EngineError::MilestoneOutOfRange { index, len })?;

        milestone.reached = !milestone.reached;
        milestone.reached_date = if milestone.reached { Some(at) } else { None };

        Ok(&*milestone)
    }
}
