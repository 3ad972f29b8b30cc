//! Text and JSON output for an analysis
//!
//! Global invariants enforced:
//! - Output order follows input order
//! - Byte-for-byte identical output across runs

use crate::aggregates::Distribution;
use crate::analysis::Analysis;
use crate::classify::ClassifiedButton;
use serde::Serialize;

/// JSON document shape
#[derive(Serialize)]
struct AnalysisReport<'a> {
    total: usize,
    variant_count: usize,
    buttons: &'a [ClassifiedButton],
    distribution: &'a Distribution,
}

/// Render an analysis as text output
pub fn render_text(analysis: &Analysis) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<20} {:<8} {:<10} {}\n",
        "ID", "HEIGHT", "SIZE", "VARIANT"
    ));
    for button in &analysis.buttons {
        output.push_str(&format!(
            "{:<20} {:<8} {:<10} {}\n",
            truncate_or_pad(&button.record.id, 20),
            format_height(button.record.height),
            button.size,
            button.variant,
        ));
    }

    output.push_str(&format!(
        "\nOriginal buttons: {}\nNew variants:     {}\n",
        analysis.total(),
        analysis.variant_count()
    ));

    if !analysis.distribution.is_empty() {
        output.push_str("\nDistribution:\n");
        for entry in analysis.distribution.entries() {
            output.push_str(&format!("  {:<24} {}\n", entry.key, entry.count));
        }
    }

    output
}

/// Render an analysis as JSON output
pub fn render_json(analysis: &Analysis) -> String {
    let report = AnalysisReport {
        total: analysis.total(),
        variant_count: analysis.variant_count(),
        buttons: &analysis.buttons,
        distribution: &analysis.distribution,
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

/// Heights are usually whole pixels; print them without a trailing `.0`
pub fn format_height(height: f64) -> String {
    if height.fract() == 0.0 {
        format!("{}", height as i64)
    } else {
        format!("{}", height)
    }
}

/// Truncate or pad string to fixed width
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        format!("{:<width$}", s, width = width)
    }
}
