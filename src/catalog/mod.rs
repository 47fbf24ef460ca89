//! Reference catalogs
//!
//! Two independent, immutable lookup tables:
//! - `requirements.rs` - sunlight, water, spacing and height per plant
//! - `companions.rs` - directed good/bad companion lists, family, benefits
//! - `validation.rs` - cross-checks run once after loading
//!
//! A plant may appear in either table without the other.

pub mod requirements;
pub mod companions;
pub mod validation;

pub use requirements::{HeightClass, PlantRequirements, RequirementsCatalog, SunlightNeed, WaterNeed};
pub use companions::{CompanionGraph, CompanionRecord};
pub use validation::{validate_catalogs, CatalogIssue};
