//! Companion compatibility queries
//!
//! Every pair check is directional: `check_pair(a, b)` reads only a's record.
//! Use `check_mutual` when both directions matter.

use crate::catalog::{CompanionGraph, CompanionRecord};
use crate::utils::names_match;
use serde::{Deserialize, Serialize};

/// Outcome of a companion check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionStatus {
    Good,
    Bad,
    Neutral,
}

/// One entry of a plant's companion list, expanded for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub plant: String,
    pub status: CompanionStatus,
    pub reason: String,
}

/// Compatibility queries over a borrowed companion graph
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityResolver<'a> {
    graph: &'a CompanionGraph,
}

impl<'a> CompatibilityResolver<'a> {
    pub fn new(graph: &'a CompanionGraph) -> Self {
        Self { graph }
    }

    /// How `a`'s own record rates `b`
    ///
    /// Neutral when `a` has no record. A malformed record listing `b` in both
    /// lists resolves as good.
    pub fn check_pair(&self, a: &str, b: &str) -> CompanionStatus {
        match self.graph.lookup(a) {
            Some(record) if record.lists_as_good(b) => CompanionStatus::Good,
            Some(record) if record.lists_as_bad(b) => CompanionStatus::Bad,
            _ => CompanionStatus::Neutral,
        }
    }

    /// Both directions combined: bad in either wins, then good in either
    pub fn check_mutual(&self, a: &str, b: &str) -> CompanionStatus {
        let forward = self.check_pair(a, b);
        let backward = self.check_pair(b, a);

        if forward == CompanionStatus::Bad || backward == CompanionStatus::Bad {
            CompanionStatus::Bad
        } else if forward == CompanionStatus::Good || backward == CompanionStatus::Good {
            CompanionStatus::Good
        } else {
            CompanionStatus::Neutral
        }
    }

    /// Expand a plant's good then bad lists into relationship records
    ///
    /// Good entries all carry the plant's single benefits text.
    pub fn relationships_for(&self, name: &str) -> Vec<Relationship> {
        let Some(record) = self.graph.lookup(name) else {
            return Vec::new();
        };

        let good = record.good_companions.iter().map(|plant| Relationship {
            plant: plant.clone(),
            status: CompanionStatus::Good,
            reason: record.benefits.clone(),
        });
        let bad = record.bad_companions.iter().map(|plant| Relationship {
            plant: plant.clone(),
            status: CompanionStatus::Bad,
            reason: "Poor companion, keep apart".to_string(),
        });

        good.chain(bad).collect()
    }

    /// Botanical family of `name`, if known
    pub fn family_of(&self, name: &str) -> Option<&'a str> {
        self.graph.lookup(name).and_then(CompanionRecord::family)
    }

    /// Plants that would suit a cell surrounded by `neighbors`
    ///
    /// A suggestion is mutually good with at least one neighbor and mutually
    /// bad with none. Neighbors themselves are not suggested. Graph order.
    pub fn suggest_companions(&self, neighbors: &[&str]) -> Vec<String> {
        if neighbors.is_empty() {
            return Vec::new();
        }

        self.graph
            .iter()
            .filter(|(candidate, _)| !neighbors.iter().any(|n| names_match(n, candidate)))
            .filter(|(candidate, _)| {
                let statuses: Vec<CompanionStatus> = neighbors
                    .iter()
                    .map(|n| self.check_mutual(candidate, n))
                    .collect();
                !statuses.contains(&CompanionStatus::Bad)
                    && statuses.contains(&CompanionStatus::Good)
            })
            .map(|(candidate, _)| candidate.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(good: &[&str], bad: &[&str], family: &str, benefits: &str) -> CompanionRecord {
        CompanionRecord {
            good_companions: good.iter().map(|s| s.to_string()).collect(),
            bad_companions: bad.iter().map(|s| s.to_string()).collect(),
            family: family.to_string(),
            benefits: benefits.to_string(),
        }
    }

    fn graph() -> CompanionGraph {
        CompanionGraph::from_records([
            ("tomato", record(&["basil", "carrot"], &["potato", "fennel"], "Solanaceae", "Repels hornworms")),
            ("basil", record(&["pepper"], &[], "Lamiaceae", "Improves flavour")),
            ("carrot", record(&["onion"], &["dill"], "Apiaceae", "Loosens soil")),
            ("potato", record(&["bean"], &["tomato"], "Solanaceae", "")),
            ("onion", record(&["carrot"], &[], "Amaryllidaceae", "Deters carrot fly")),
            ("marigold", record(&["tomato"], &[], "", "Deters nematodes")),
        ])
    }

    #[test]
    fn test_check_pair_is_directional() {
        let g = graph();
        let resolver = CompatibilityResolver::new(&g);

        assert_eq!(resolver.check_pair("tomato", "basil"), CompanionStatus::Good);
        // basil's own record does not mention tomato
        assert_eq!(resolver.check_pair("basil", "tomato"), CompanionStatus::Neutral);
        assert_eq!(resolver.check_pair("tomato", "Potato"), CompanionStatus::Bad);
    }

    #[test]
    fn test_unlisted_pairs_are_neutral_both_ways() {
        let g = graph();
        let resolver = CompatibilityResolver::new(&g);

        assert_eq!(resolver.check_pair("onion", "basil"), CompanionStatus::Neutral);
        assert_eq!(resolver.check_pair("basil", "onion"), CompanionStatus::Neutral);
        assert_eq!(resolver.check_pair("kohlrabi", "onion"), CompanionStatus::Neutral);
    }

    #[test]
    fn test_good_wins_for_malformed_record() {
        let g = CompanionGraph::from_records([("carrot", record(&["dill"], &["dill"], "Apiaceae", ""))]);
        let resolver = CompatibilityResolver::new(&g);
        assert_eq!(resolver.check_pair("carrot", "dill"), CompanionStatus::Good);
    }

    #[test]
    fn test_check_mutual() {
        let g = graph();
        let resolver = CompatibilityResolver::new(&g);

        // good one way, neutral the other
        assert_eq!(resolver.check_mutual("basil", "tomato"), CompanionStatus::Good);
        // bad both ways
        assert_eq!(resolver.check_mutual("potato", "tomato"), CompanionStatus::Bad);
        // good one way, bad the other: bad wins
        let g2 = CompanionGraph::from_records([
            ("a", record(&["b"], &[], "X", "")),
            ("b", record(&[], &["a"], "Y", "")),
        ]);
        assert_eq!(CompatibilityResolver::new(&g2).check_mutual("a", "b"), CompanionStatus::Bad);
    }

    #[test]
    fn test_relationships_for() {
        let g = graph();
        let resolver = CompatibilityResolver::new(&g);
        let rels = resolver.relationships_for("tomato");

        assert_eq!(rels.len(), 4);
        assert_eq!(rels[0].plant, "basil");
        assert_eq!(rels[0].status, CompanionStatus::Good);
        assert_eq!(rels[0].reason, "Repels hornworms");
        assert_eq!(rels[1].reason, "Repels hornworms");
        assert_eq!(rels[2].plant, "potato");
        assert_eq!(rels[2].status, CompanionStatus::Bad);

        assert!(resolver.relationships_for("kohlrabi").is_empty());
    }

    #[test]
    fn test_family_of() {
        let g = graph();
        let resolver = CompatibilityResolver::new(&g);
        assert_eq!(resolver.family_of("Tomato"), Some("Solanaceae"));
        assert_eq!(resolver.family_of("marigold"), None);
        assert_eq!(resolver.family_of("kohlrabi"), None);
    }

    #[test]
    fn test_suggest_companions() {
        let g = graph();
        let resolver = CompatibilityResolver::new(&g);

        // Next to tomato: basil and carrot are listed by tomato, marigold lists tomato.
        // Potato is bad. Onion is neutral.
        assert_eq!(
            resolver.suggest_companions(&["tomato"]),
            vec!["basil".to_string(), "carrot".to_string(), "marigold".to_string()]
        );

        // Next to tomato and onion: carrot is good with both
        assert_eq!(
            resolver.suggest_companions(&["tomato", "onion"]),
            vec!["basil".to_string(), "carrot".to_string(), "marigold".to_string()]
        );

        assert!(resolver.suggest_companions(&[]).is_empty());
    }
}
