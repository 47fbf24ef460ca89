//! Layout alert types
//!
//! Alerts are derived per analysis call and never stored.

use super::grid::CellPos;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a layout alert is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    Spacing,
    CompanionConflict,
    CompanionSynergy,
    WaterMismatch,
    SunlightShading,
}

impl AlertKind {
    pub fn is_companion(&self) -> bool {
        matches!(self, AlertKind::CompanionConflict | AlertKind::CompanionSynergy)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Spacing => "spacing",
            AlertKind::CompanionConflict => "companion-conflict",
            AlertKind::CompanionSynergy => "companion-synergy",
            AlertKind::WaterMismatch => "water-mismatch",
            AlertKind::SunlightShading => "sunlight-shading",
        }
    }
}

/// Severity level for layout alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One finding about the bed layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutAlert {
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    /// Affected cells, all within grid bounds
    pub cells: Vec<CellPos>,
}

impl LayoutAlert {
    pub fn new(kind: AlertKind, severity: Severity, message: String, cells: Vec<CellPos>) -> Self {
        Self { kind, severity, message, cells }
    }

    /// Structured identity of a companion alert: kind plus the sorted cell pair
    ///
    /// None for non-companion alerts, which are never deduplicated.
    pub fn companion_key(&self) -> Option<(AlertKind, CellPos, CellPos)> {
        if !self.kind.is_companion() {
            return None;
        }
        match self.cells.as_slice() {
            [a, b] => Some((self.kind, *a.min(b), *a.max(b))),
            _ => None,
        }
    }
}

/// Drop repeat companion alerts for the same pair, keeping the first
///
/// Each side of a pair scans the other, so both directions can report it.
/// A synergy and a conflict on the same pair are different kinds and both survive.
pub fn dedup_companion_alerts(alerts: Vec<LayoutAlert>) -> Vec<LayoutAlert> {
    let mut seen = FxHashSet::default();
    alerts
        .into_iter()
        .filter(|alert| match alert.companion_key() {
            Some(key) => seen.insert(key),
            None => true,
        })
        .collect()
}

/// Alert counts for the layout view header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub total: usize,
    pub info: usize,
    pub warnings: usize,
    pub errors: usize,
    pub by_kind: BTreeMap<AlertKind, usize>,
    pub has_errors: bool,
}

/// Count alerts by severity and kind
pub fn summarize(alerts: &[LayoutAlert]) -> LayoutSummary {
    let mut summary = LayoutSummary {
        total: alerts.len(),
        ..Default::default()
    };

    for alert in alerts {
        match alert.severity {
            Severity::Info => summary.info += 1,
            Severity::Warning => summary.warnings += 1,
            Severity::Error => summary.errors += 1,
        }
        *summary.by_kind.entry(alert.kind).or_insert(0) += 1;
    }

    summary.has_errors = summary.errors > 0;
    summary
}
