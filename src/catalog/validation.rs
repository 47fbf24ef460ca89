//! Load-time catalog consistency checks
//!
//! The reference datasets are hand-maintained. Issues found here are logged
//! and reported, never fatal: the engine keeps using the data as-is.

use super::{CompanionGraph, RequirementsCatalog};
use crate::utils::catalog_key;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;

/// A data-quality finding in the reference catalogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "kebab-case")]
pub enum CatalogIssue {
    /// A record lists the same companion as both good and bad.
    /// Pair checks resolve such a pair as good.
    ConflictingListing { plant: String, companion: String },

    /// A name used by the companion graph has no requirements entry.
    /// Spatial rules that need requirements are skipped for it.
    MissingRequirements { plant: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::ConflictingListing { plant, companion } => write!(
                f,
                "{} lists {} as both a good and a bad companion",
                plant, companion
            ),
            CatalogIssue::MissingRequirements { plant } => {
                write!(f, "{} has companion data but no requirements entry", plant)
            }
        }
    }
}

/// Check both catalogs against each other
///
/// Returns issues in companion-graph order. Each missing name is reported once.
pub fn validate_catalogs(
    requirements: &RequirementsCatalog,
    companions: &CompanionGraph,
) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut reported_missing: FxHashSet<String> = FxHashSet::default();

    for (plant, record) in companions.iter() {
        for good in &record.good_companions {
            if record.lists_as_bad(good) {
                issues.push(CatalogIssue::ConflictingListing {
                    plant: plant.to_string(),
                    companion: good.clone(),
                });
            }
        }

        let referenced = std::iter::once(plant)
            .chain(record.good_companions.iter().map(String::as_str))
            .chain(record.bad_companions.iter().map(String::as_str));

        for name in referenced {
            if !requirements.contains(name) && reported_missing.insert(catalog_key(name)) {
                issues.push(CatalogIssue::MissingRequirements {
                    plant: name.to_string(),
                });
            }
        }
    }

    issues
}
