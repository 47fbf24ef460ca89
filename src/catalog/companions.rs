//! Companion graph
//!
//! Two directed tables per plant (good, bad) plus family and benefit text.
//! Nothing here assumes symmetry: tomato listing basil as good says nothing
//! about basil's own record.
//!
//! Records keep dataset order so that iteration (rotation suggestions,
//! companion suggestions) is deterministic.

use crate::utils::{catalog_key, names_match};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Companion data for one plant
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanionRecord {
    pub good_companions: Vec<String>,
    pub bad_companions: Vec<String>,
    pub family: String,
    pub benefits: String,
}

impl CompanionRecord {
    /// Whether this record lists `name` as a good companion
    pub fn lists_as_good(&self, name: &str) -> bool {
        self.good_companions.iter().any(|c| names_match(c, name))
    }

    /// Whether this record lists `name` as a bad companion
    pub fn lists_as_bad(&self, name: &str) -> bool {
        self.bad_companions.iter().any(|c| names_match(c, name))
    }

    /// Family name, None when the dataset left it blank
    pub fn family(&self) -> Option<&str> {
        let family = self.family.trim();
        if family.is_empty() {
            None
        } else {
            Some(family)
        }
    }
}

/// Immutable lookup: plant common name → companion record
#[derive(Debug, Clone, Default)]
pub struct CompanionGraph {
    /// (display name as authored, record) in dataset order
    records: Vec<(String, CompanionRecord)>,
    /// catalog key → position in `records`
    index: FxHashMap<String, usize>,
}

impl CompanionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (name, record) pairs in dataset order
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (S, CompanionRecord)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (name, record) in records {
            graph.insert(name, record);
        }
        graph
    }

    /// Insert a record; a duplicate key replaces the record in place
    pub fn insert(&mut self, name: impl Into<String>, record: CompanionRecord) {
        let name = name.into();
        let key = catalog_key(&name);
        match self.index.get(&key) {
            Some(&pos) => self.records[pos] = (name, record),
            None => {
                self.index.insert(key, self.records.len());
                self.records.push((name, record));
            }
        }
    }

    /// Companion record for `name`, or None when the dataset has no entry
    pub fn lookup(&self, name: &str) -> Option<&CompanionRecord> {
        self.index
            .get(&catalog_key(name))
            .map(|&pos| &self.records[pos].1)
    }

    /// Records in dataset order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompanionRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(good: &[&str], bad: &[&str], family: &str) -> CompanionRecord {
        CompanionRecord {
            good_companions: good.iter().map(|s| s.to_string()).collect(),
            bad_companions: bad.iter().map(|s| s.to_string()).collect(),
            family: family.to_string(),
            benefits: String::new(),
        }
    }

    #[test]
    fn test_lookup_and_membership() {
        let graph = CompanionGraph::from_records([
            ("Tomato", record(&["Basil"], &["Potato"], "Solanaceae")),
            ("Basil", record(&[], &[], "Lamiaceae")),
        ]);

        let tomato = graph.lookup("tomato").unwrap();
        assert!(tomato.lists_as_good("basil"));
        assert!(tomato.lists_as_bad("POTATO"));
        assert!(!tomato.lists_as_good("potato"));

        // Not symmetric
        assert!(!graph.lookup("basil").unwrap().lists_as_good("tomato"));
    }

    #[test]
    fn test_iteration_keeps_dataset_order() {
        let graph = CompanionGraph::from_records([
            ("squash", record(&[], &[], "Cucurbitaceae")),
            ("corn", record(&[], &[], "Poaceae")),
            ("bush bean", record(&[], &[], "Fabaceae")),
        ]);

        let names: Vec<&str> = graph.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["squash", "corn", "bush bean"]);
    }

    #[test]
    fn test_duplicate_replaces_in_place() {
        let graph = CompanionGraph::from_records([
            ("corn", record(&[], &[], "Poaceae")),
            ("squash", record(&[], &[], "Cucurbitaceae")),
            ("Corn", record(&["squash"], &[], "Poaceae")),
        ]);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.iter().next().unwrap().0, "Corn");
        assert!(graph.lookup("corn").unwrap().lists_as_good("squash"));
    }

    #[test]
    fn test_blank_family_is_none() {
        assert_eq!(record(&[], &[], "  ").family(), None);
        assert_eq!(record(&[], &[], "Apiaceae").family(), Some("Apiaceae"));
    }
}
