//! Distribution of (variant, size) combinations
//!
//! Global invariants enforced:
//! - Aggregates are strictly derived (never stored, always computed)
//! - Keys keep first-occurrence order
//! - Sum of counts equals the number of inputs

use crate::classify::ClassifiedButton;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the distribution table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub key: String,
    pub count: usize,
}

/// Ordered frequency table keyed by `"<variant> - <size>"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    entries: Vec<DistributionEntry>,
    index: HashMap<String, usize>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`, appending it on first sight
    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push(DistributionEntry {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&i| self.entries[i].count)
    }

    /// Entries in first-occurrence order
    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries by descending count; ties keep first-occurrence order
    pub fn sorted_by_count(&self) -> Vec<DistributionEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

impl Serialize for Distribution {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Build the distribution table in a single pass
pub fn aggregate(classified: &[ClassifiedButton]) -> Distribution {
    classified.iter().fold(Distribution::new(), |mut dist, button| {
        dist.increment(&button.key());
        dist
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_buttons;
    use crate::record::ButtonRecord;

    fn keys(dist: &Distribution) -> Vec<(&str, usize)> {
        dist.entries()
            .iter()
            .map(|e| (e.key.as_str(), e.count))
            .collect()
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let dist = aggregate(&[]);
        assert!(dist.is_empty());
        assert_eq!(dist.total(), 0);
    }

    #[test]
    fn test_first_occurrence_order() {
        let records = vec![
            ButtonRecord::new("1", 45.0, "", ""),
            ButtonRecord::new("2", 20.0, "pink", ""),
            ButtonRecord::new("3", 50.0, "", ""),
            ButtonRecord::new("4", 22.0, "pink-100", ""),
            ButtonRecord::new("5", 36.0, "", "border-none"),
        ];
        let dist = aggregate(&classify_buttons(&records));
        assert_eq!(
            keys(&dist),
            vec![
                ("secondary - large", 2),
                ("primary - mini", 2),
                ("ghost - regular", 1),
            ]
        );
        assert_eq!(dist.total(), records.len());
    }

    #[test]
    fn test_sorted_by_count_is_stable() {
        let mut dist = Distribution::new();
        for key in ["a", "b", "b", "c", "d", "d", "c"] {
            dist.increment(key);
        }
        let sorted: Vec<(String, usize)> = dist
            .sorted_by_count()
            .into_iter()
            .map(|e| (e.key, e.count))
            .collect();
        assert_eq!(
            sorted,
            vec![
                ("b".to_string(), 2),
                ("c".to_string(), 2),
                ("d".to_string(), 2),
                ("a".to_string(), 1),
            ]
        );
        // the table itself is untouched
        assert_eq!(dist.entries()[0].key, "a");
    }

    #[test]
    fn test_get() {
        let mut dist = Distribution::new();
        dist.increment("ghost - mini");
        dist.increment("ghost - mini");
        assert_eq!(dist.get("ghost - mini"), Some(2));
        assert_eq!(dist.get("ghost - large"), None);
    }

    #[test]
    fn test_serializes_as_ordered_array() {
        let mut dist = Distribution::new();
        dist.increment("primary - small");
        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"[{"key":"primary - small","count":1}]"#);
    }
}
