//! Per-record classification

use crate::record::ButtonRecord;
use crate::size::{classify_size, SizeCategory};
use crate::variant::{classify_variant, Variant};
use serde::Serialize;

/// A button record together with its new size and variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedButton {
    #[serde(flatten)]
    pub record: ButtonRecord,
    pub size: SizeCategory,
    pub variant: Variant,
}

impl ClassifiedButton {
    pub fn from_record(record: &ButtonRecord) -> Self {
        ClassifiedButton {
            size: classify_size(record.height),
            variant: classify_variant(&record.color, &record.class_name),
            record: record.clone(),
        }
    }

    /// Distribution key, `"<variant> - <size>"`
    pub fn key(&self) -> String {
        format!("{} - {}", self.variant, self.size)
    }
}

/// Classify every record, preserving input order
pub fn classify_buttons(records: &[ButtonRecord]) -> Vec<ClassifiedButton> {
    records.iter().map(ClassifiedButton::from_record).collect()
}
