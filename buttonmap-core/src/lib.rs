//! buttonmap core library - classification of legacy buttons into the new
//! size and variant taxonomy

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Classification is strictly per-record
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Output order follows input order unless a step sorts explicitly
// - Identical input yields byte-for-byte identical output

pub mod aggregates;
pub mod analysis;
pub mod classify;
pub mod config;
pub mod html;
pub mod record;
pub mod reference;
pub mod report;
pub mod size;
pub mod style;
pub mod variant;

pub use aggregates::{aggregate, Distribution, DistributionEntry};
pub use analysis::Analysis;
pub use classify::{classify_buttons, ClassifiedButton};
pub use config::ResolvedConfig;
pub use record::{load_buttons, parse_buttons, ButtonRecord};
pub use report::{render_json, render_text};
pub use size::{classify_size, SizeCategory};
pub use variant::{classify_variant, Variant};

use anyhow::{Context, Result};
use std::path::Path;

/// Load a button list and classify it
pub fn analyze(buttons_path: &Path) -> Result<Analysis> {
    let records = load_buttons(buttons_path)?;
    Ok(Analysis::new(&records))
}

/// Write a file atomically (temp file in the same directory, then rename)
pub fn atomic_write(path: &Path, contents: &str) -> Result<()> {
    use std::fs;
    use std::io::Write;

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file = fs::File::create(&temp_path)
        .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write to temp file: {}", temp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to sync temp file: {}", temp_path.display()))?;
    drop(file);

    fs::rename(&temp_path, path)
        .with_context(|| format!("failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_creates_parents_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.html");

        atomic_write(&path, "first").unwrap();
        atomic_write(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_analyze_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buttons.json");
        std::fs::write(&path, r#"[{"id": "A", "height": 20}]"#).unwrap();

        let analysis = analyze(&path).unwrap();
        assert_eq!(analysis.total(), 1);
        assert_eq!(analysis.buttons[0].size, SizeCategory::Mini);
    }
}
