//! Size classification
//!
//! Global invariants enforced:
//! - Size is a pure function of height
//! - Every finite height maps to exactly one category

use serde::{Deserialize, Serialize};

/// Height (px) below which a button is mini
pub const MINI_BELOW: f64 = 24.0;
/// Height (px) below which a button is small
pub const SMALL_BELOW: f64 = 32.0;
/// Height (px) at or below which a button is regular
pub const REGULAR_MAX: f64 = 40.0;

/// Size category of the new button system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Mini,  // < 24
    Small, // 24-31
    #[default]
    Regular, // 32-40
    Large,   // > 40
}

impl SizeCategory {
    /// All categories, smallest first
    pub const ALL: [SizeCategory; 4] = [
        SizeCategory::Mini,
        SizeCategory::Small,
        SizeCategory::Regular,
        SizeCategory::Large,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::Mini => "mini",
            SizeCategory::Small => "small",
            SizeCategory::Regular => "regular",
            SizeCategory::Large => "large",
        }
    }

    /// Capitalized label used in headings
    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::Mini => "Mini",
            SizeCategory::Small => "Small",
            SizeCategory::Regular => "Regular",
            SizeCategory::Large => "Large",
        }
    }

    /// Human-readable threshold rule
    pub fn rule(&self) -> &'static str {
        match self {
            SizeCategory::Mini => "< 24px",
            SizeCategory::Small => "< 32px",
            SizeCategory::Regular => "32px - 40px",
            SizeCategory::Large => "> 40px",
        }
    }

    /// Nominal rendered height of the new component and its tailwind token
    pub fn nominal_height(&self) -> (u32, &'static str) {
        match self {
            SizeCategory::Mini => (20, "h-5"),
            SizeCategory::Small => (28, "h-7"),
            SizeCategory::Regular => (36, "h-9"),
            SizeCategory::Large => (44, "h-11"),
        }
    }
}

impl std::fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify a button height into a size category
///
/// Thresholds:
/// - height < 24 => mini
/// - 24 <= height < 32 => small
/// - 32 <= height <= 40 => regular
/// - height > 40 => large
pub fn classify_size(height: f64) -> SizeCategory {
    if height < MINI_BELOW {
        SizeCategory::Mini
    } else if height < SMALL_BELOW {
        SizeCategory::Small
    } else if height <= REGULAR_MAX {
        SizeCategory::Regular
    } else {
        SizeCategory::Large
    }
}
