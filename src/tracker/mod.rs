//! Plant tracker
//!
//! - `state.rs` - tracked plant records and their mutations
//! - `growth_stage.rs` - days since planting to stage and harvest progress
//! - `watering.rs` - weather-adjusted watering urgency

pub mod state;
pub mod growth_stage;
pub mod watering;

pub use state::{Milestone, TrackedPlantState, WateringFrequency};
pub use growth_stage::{evaluate_growth, GrowthReport, NextMilestone, StageSource};
pub use watering::{advise_watering, WateringReport, WateringUrgency, WeatherReading};
