//! Crop rotation planner
//!
//! Flags a candidate that shares a botanical family with anything previously
//! grown in the same bed, and proposes plants from other families.

use crate::catalog::CompanionGraph;
use crate::config::RotationRules;
use crate::utils::display_name;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rotation verdict for one candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationAdvice {
    pub should_rotate: bool,
    pub reason: String,
    pub suggestions: Vec<String>,
    pub shared_family: Option<String>,
    pub conflicting_plant: Option<String>,
}

impl RotationAdvice {
    fn no_rotation(reason: String) -> Self {
        Self {
            should_rotate: false,
            reason,
            suggestions: Vec::new(),
            shared_family: None,
            conflicting_plant: None,
        }
    }
}

/// Rotation queries over a borrowed companion graph
#[derive(Debug, Clone, Copy)]
pub struct RotationPlanner<'a> {
    graph: &'a CompanionGraph,
    rules: &'a RotationRules,
}

impl<'a> RotationPlanner<'a> {
    pub fn new(graph: &'a CompanionGraph, rules: &'a RotationRules) -> Self {
        Self { graph, rules }
    }

    fn family_of(&self, name: &str) -> Option<&'a str> {
        self.graph.lookup(name).and_then(|r| r.family())
    }

    /// Advise on planting `candidate` after `previous` in the same bed
    ///
    /// Unknown families never trigger rotation: a candidate without one gets a
    /// negative verdict and prior plants without one are skipped.
    pub fn advise(&self, candidate: &str, previous: &[String]) -> RotationAdvice {
        let Some(family) = self.family_of(candidate) else {
            return RotationAdvice::no_rotation(format!(
                "No family data for {}",
                display_name(candidate)
            ));
        };

        let conflict = previous.iter().find(|prior| {
            self.family_of(prior)
                .is_some_and(|f| f.eq_ignore_ascii_case(family))
        });

        let Some(conflict) = conflict else {
            return RotationAdvice::no_rotation(format!(
                "No {} grown here recently",
                family
            ));
        };

        let suggestions: Vec<String> = self
            .graph
            .iter()
            .filter(|(_, record)| {
                record
                    .family()
                    .is_some_and(|f| !f.eq_ignore_ascii_case(family))
            })
            .map(|(name, _)| name.to_string())
            .take(self.rules.max_suggestions)
            .collect();

        debug!(
            candidate,
            family,
            conflict = conflict.as_str(),
            suggestions = suggestions.len(),
            "rotation needed"
        );

        RotationAdvice {
            should_rotate: true,
            reason: format!(
                "{} and {} are both {}; rotate to a different family",
                display_name(candidate),
                display_name(conflict),
                family
            ),
            suggestions,
            shared_family: Some(family.to_string()),
            conflicting_plant: Some(conflict.clone()),
        }
    }
}
