//! Analysis orchestration - ties together classification and aggregation

use crate::aggregates::{aggregate, Distribution};
use crate::classify::{classify_buttons, ClassifiedButton};
use crate::record::ButtonRecord;

/// Result of one classification pass over a button list
///
/// Computed once per load and then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub buttons: Vec<ClassifiedButton>,
    pub distribution: Distribution,
}

impl Analysis {
    pub fn new(records: &[ButtonRecord]) -> Self {
        let buttons = classify_buttons(records);
        let distribution = aggregate(&buttons);
        Analysis {
            buttons,
            distribution,
        }
    }

    /// Number of original buttons
    pub fn total(&self) -> usize {
        self.buttons.len()
    }

    /// Number of distinct (variant, size) combinations in use
    pub fn variant_count(&self) -> usize {
        self.distribution.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ButtonRecord> {
        vec![
            ButtonRecord::new("A", 20.0, "", ""),
            ButtonRecord::new("B", 36.0, "pink-200", ""),
            ButtonRecord::new("C", 45.0, "", "bg-transparent"),
        ]
    }

    #[test]
    fn test_reference_example() {
        let analysis = Analysis::new(&sample());
        let entries: Vec<(&str, usize)> = analysis
            .distribution
            .entries()
            .iter()
            .map(|e| (e.key.as_str(), e.count))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("secondary - mini", 1),
                ("primary - regular", 1),
                ("ghost - large", 1),
            ]
        );
        assert_eq!(analysis.total(), 3);
        assert_eq!(analysis.variant_count(), 3);
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let records = sample();
        assert_eq!(Analysis::new(&records), Analysis::new(&records));
    }
}
