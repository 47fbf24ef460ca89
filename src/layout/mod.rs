//! Bed layout analysis
//!
//! - `grid.rs` - planting grid and Moore neighborhood enumeration
//! - `compatibility.rs` - directional companion queries
//! - `spatial_analyzer.rs` - spacing/companion/water/shading rules over a grid
//! - `alerts.rs` - alert types, companion dedup, summary counts

pub mod grid;
pub mod compatibility;
pub mod spatial_analyzer;
pub mod alerts;

pub use grid::{CellPos, PlacedPlant, PlantingGrid};
pub use compatibility::{CompanionStatus, CompatibilityResolver, Relationship};
pub use spatial_analyzer::GridSpatialAnalyzer;
pub use alerts::{summarize, AlertKind, LayoutAlert, LayoutSummary, Severity};
