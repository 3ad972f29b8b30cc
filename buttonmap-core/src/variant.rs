//! Variant classification for the live analysis view
//!
//! The reference patcher infers variants differently, see
//! [`crate::reference::reference_variant`]. The two are kept apart.

use serde::{Deserialize, Serialize};

/// Style variant of the new button system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Primary,
    #[default]
    Secondary,
    Ghost,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Ghost => "ghost",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Class tokens that mark a legacy button as borderless/transparent
const GHOST_MARKERS: &[&str] = &["bg-transparent", "border-none"];

/// Classify a legacy button's color and class list into a variant
///
/// First match wins:
/// 1. color contains "pink" => primary
/// 2. class name contains "bg-transparent" or "border-none" => ghost
/// 3. otherwise => secondary
///
/// Matching is case-sensitive substring matching.
pub fn classify_variant(color: &str, class_name: &str) -> Variant {
    if color.contains("pink") {
        Variant::Primary
    } else if GHOST_MARKERS.iter().any(|m| class_name.contains(m)) {
        Variant::Ghost
    } else {
        Variant::Secondary
    }
}
