//! Data Loading and Management
//!
//! Loads the two bundled reference catalogs from CSV using Polars:
//! - `plant_requirements.csv`: plant, sunlight, water, spacing_inches, height
//! - `companions.csv`: plant, family, good_companions, bad_companions, benefits
//!
//! Companion lists are pipe-separated ("basil|carrot|onion"). Rows with
//! unusable values are skipped with a warning; a missing file or column is
//! a load error.

use crate::catalog::{
    validate_catalogs, CatalogIssue, CompanionGraph, CompanionRecord, HeightClass,
    PlantRequirements, RequirementsCatalog, SunlightNeed, WaterNeed,
};
use crate::utils::split_name_list;
use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

pub const REQUIREMENTS_FILE: &str = "plant_requirements.csv";
pub const COMPANIONS_FILE: &str = "companions.csv";

const SPACING_COLUMN: &str = "spacing_inches";

/// Main data holder for the rule evaluators
///
/// Loaded once at startup, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct GardenCatalogs {
    /// Plant name → sunlight/water/spacing/height
    pub requirements: RequirementsCatalog,

    /// Plant name → good/bad companions, family, benefits
    pub companions: CompanionGraph,
}

impl GardenCatalogs {
    pub fn new(requirements: RequirementsCatalog, companions: CompanionGraph) -> Self {
        Self { requirements, companions }
    }

    /// Load both catalogs from a data directory and log any consistency issues
    pub fn load(data_dir: &Path) -> Result<Self> {
        tracing::info!("Loading reference catalogs from {:?}", data_dir);

        let requirements = Self::load_requirements(&data_dir.join(REQUIREMENTS_FILE))?;
        let companions = Self::load_companions(&data_dir.join(COMPANIONS_FILE))?;

        tracing::info!("  Requirements: {}", requirements.len());
        tracing::info!("  Companion records: {}", companions.len());

        let catalogs = Self::new(requirements, companions);
        for issue in catalogs.validate() {
            tracing::warn!("Catalog issue: {}", issue);
        }

        Ok(catalogs)
    }

    /// Cross-check the two catalogs
    pub fn validate(&self) -> Vec<CatalogIssue> {
        validate_catalogs(&self.requirements, &self.companions)
    }

    /// Load plant requirements from CSV
    pub fn load_requirements(path: &Path) -> Result<RequirementsCatalog> {
        let df = read_csv(path)?;

        let names = string_column(&df, "plant")?;
        let sunlight = string_column(&df, "sunlight")?;
        let water = string_column(&df, "water")?;
        let height = string_column(&df, "height")?;
        let spacing_col = df
            .column(SPACING_COLUMN)
            .with_context(|| format!("Column '{}' not found", SPACING_COLUMN))?
            .cast(&DataType::Int64)
            .with_context(|| format!("Column '{}' is not numeric", SPACING_COLUMN))?;
        let spacing = spacing_col.i64()?;

        let mut catalog = RequirementsCatalog::new();

        for idx in 0..df.height() {
            let Some(name) = names.get(idx).map(str::trim).filter(|n| !n.is_empty()) else {
                tracing::warn!("{}: row {} has no plant name, skipped", REQUIREMENTS_FILE, idx + 1);
                continue;
            };

            match parse_requirements_row(
                sunlight.get(idx),
                water.get(idx),
                spacing.get(idx),
                height.get(idx),
            ) {
                Some(requirements) => catalog.insert(name, requirements),
                None => tracing::warn!(
                    "{}: unusable requirements for '{}', skipped",
                    REQUIREMENTS_FILE,
                    name
                ),
            }
        }

        Ok(catalog)
    }

    /// Load companion records from CSV
    pub fn load_companions(path: &Path) -> Result<CompanionGraph> {
        let df = read_csv(path)?;

        let names = string_column(&df, "plant")?;
        let good = string_column(&df, "good_companions")?;
        let bad = string_column(&df, "bad_companions")?;
        // Family and benefits are descriptive; tolerate their absence
        let family = df.column("family").ok().and_then(|c| c.str().ok());
        let benefits = df.column("benefits").ok().and_then(|c| c.str().ok());

        let mut graph = CompanionGraph::new();

        for idx in 0..df.height() {
            let Some(name) = names.get(idx).map(str::trim).filter(|n| !n.is_empty()) else {
                tracing::warn!("{}: row {} has no plant name, skipped", COMPANIONS_FILE, idx + 1);
                continue;
            };

            graph.insert(
                name,
                CompanionRecord {
                    good_companions: good.get(idx).map(split_name_list).unwrap_or_default(),
                    bad_companions: bad.get(idx).map(split_name_list).unwrap_or_default(),
                    family: family
                        .and_then(|col| col.get(idx))
                        .unwrap_or("")
                        .trim()
                        .to_string(),
                    benefits: benefits
                        .and_then(|col| col.get(idx))
                        .unwrap_or("")
                        .trim()
                        .to_string(),
                },
            );
        }

        Ok(graph)
    }
}

/// Parse one requirements row; None if any field is missing or invalid
fn parse_requirements_row(
    sunlight: Option<&str>,
    water: Option<&str>,
    spacing: Option<i64>,
    height: Option<&str>,
) -> Option<PlantRequirements> {
    let spacing_inches = u32::try_from(spacing?).ok().filter(|s| *s > 0)?;

    Some(PlantRequirements {
        sunlight: SunlightNeed::parse(sunlight?)?,
        water: WaterNeed::parse(water?)?,
        spacing_inches,
        height: HeightClass::parse(height?)?,
    })
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to load CSV: {}", path.display()))
}

fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    df.column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .str()
        .with_context(|| format!("Column '{}' is not string type", name))
}
