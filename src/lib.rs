//! Garden Intelligence Engine
//!
//! Rule-based advice for a home vegetable garden, evaluated over two static
//! reference catalogs (plant requirements and companion lists):
//!
//! - `catalog/`: requirement and companion lookups, cross-catalog validation
//! - `data`: CSV loading with Polars
//! - `layout/`: bed grid, companion queries, spatial layout alerts
//! - `tracker/`: tracked plants, growth stage and watering advice
//! - `rotation`: crop rotation by botanical family
//! - `engine`: facade owning catalogs and config, parallel tracker evaluation
//! - `config`: rule thresholds, optionally overridden from JSON
//!
//! All evaluators are pure: "now" and the weather are passed in, so identical
//! inputs give identical outputs.

pub mod utils;
pub mod error;
pub mod config;
pub mod catalog;
pub mod data;
pub mod layout;
pub mod tracker;
pub mod rotation;
pub mod engine;

// Re-export commonly used types
pub use error::{EngineError, EngineResult};
pub use config::{EngineConfig, LayoutRules, RotationRules, WateringRules};
pub use catalog::{CompanionGraph, CompanionRecord, PlantRequirements, RequirementsCatalog};
pub use data::GardenCatalogs;
pub use layout::{
    AlertKind, CompanionStatus, CompatibilityResolver, LayoutAlert, LayoutSummary, PlacedPlant,
    PlantingGrid, Severity,
};
pub use tracker::{
    GrowthReport, Milestone, TrackedPlantState, WateringFrequency, WateringReport, WateringUrgency,
    WeatherReading,
};
pub use rotation::{RotationAdvice, RotationPlanner};
pub use engine::{GardenEngine, TrackerCard};
