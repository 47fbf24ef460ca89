//! Requirements catalog
//!
//! Per-plant physical requirements keyed by common name. A miss is a normal
//! outcome: callers skip whatever rule needed the data.

use crate::utils::catalog_key;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Sunlight class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SunlightNeed {
    Full,
    Partial,
    Shade,
}

impl SunlightNeed {
    /// Parse dataset spellings ("full", "Full sun", "part shade", ...)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "full" | "full sun" | "sun" => Some(SunlightNeed::Full),
            "partial" | "partial sun" | "partial shade" | "part shade" | "part sun" => {
                Some(SunlightNeed::Partial)
            }
            "shade" | "full shade" => Some(SunlightNeed::Shade),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SunlightNeed::Full => "full",
            SunlightNeed::Partial => "partial",
            SunlightNeed::Shade => "shade",
        }
    }
}

/// Water class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterNeed {
    Low,
    Medium,
    High,
}

impl WaterNeed {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(WaterNeed::Low),
            "medium" | "moderate" => Some(WaterNeed::Medium),
            "high" => Some(WaterNeed::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WaterNeed::Low => "low",
            WaterNeed::Medium => "medium",
            WaterNeed::High => "high",
        }
    }
}

/// Mature height class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightClass {
    Low,
    Medium,
    Tall,
}

impl HeightClass {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" | "short" => Some(HeightClass::Low),
            "medium" => Some(HeightClass::Medium),
            "tall" | "high" => Some(HeightClass::Tall),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeightClass::Low => "low",
            HeightClass::Medium => "medium",
            HeightClass::Tall => "tall",
        }
    }
}

/// Physical requirements of one plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRequirements {
    pub sunlight: SunlightNeed,
    pub water: WaterNeed,
    /// Recommended spacing in inches (> 0)
    pub spacing_inches: u32,
    pub height: HeightClass,
}

/// Immutable lookup: plant common name → requirements
#[derive(Debug, Clone, Default)]
pub struct RequirementsCatalog {
    entries: FxHashMap<String, PlantRequirements>,
}

impl RequirementsCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (name, requirements) pairs; later duplicates win
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PlantRequirements)>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for (name, requirements) in entries {
            catalog.insert(name.as_ref(), requirements);
        }
        catalog
    }

    pub fn insert(&mut self, name: &str, requirements: PlantRequirements) {
        self.entries.insert(catalog_key(name), requirements);
    }

    /// Requirements for `name`, or None when the dataset has no entry
    pub fn lookup(&self, name: &str) -> Option<&PlantRequirements> {
        self.entries.get(&catalog_key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&catalog_key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
