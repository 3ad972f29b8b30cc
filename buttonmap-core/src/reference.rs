//! Reference page patcher
//!
//! Rewrites the hand-authored reference page so that its labels, button
//! classes, counters and distribution table follow the new size rules.
//!
//! Global invariants enforced:
//! - Substitutions run in a fixed order
//! - Each substitution pairs its n-th match with the n-th button
//! - A match without a corresponding button is left untouched
//! - Variant labels found on the page are written back as-is; only sizes
//!   are recomputed
//!
//! Sizes and variants here use the reference page's own vocabulary
//! (`sm`/`reg`/`lg`, `outline`) and are deliberately not shared with
//! [`crate::size`] and [`crate::variant`].

use crate::aggregates::{Distribution, DistributionEntry};
use crate::record::ButtonRecord;
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::OnceLock;

/// Stylesheet injected so the page can render every size class
const SIZE_STYLES: &str = r#"
<style>
  .shadcn-btn-reg { height: 36px; padding: 0 16px; font-size: 14px; }
  .shadcn-btn-mini { height: 20px; padding: 0 8px; font-size: 12px; }
  .shadcn-btn-sm { height: 28px; padding: 0 12px; font-size: 14px; }
  .shadcn-btn-lg { height: 44px; padding: 0 24px; font-size: 16px; }
</style>
"#;

/// Marker used to detect an already injected stylesheet
const SIZE_STYLES_MARKER: &str = ".shadcn-btn-reg {";

/// Size class names used on the reference page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSize {
    Mini,
    Sm,
    Reg,
    Lg,
}

impl ReferenceSize {
    /// Suffix of the `shadcn-btn-*` size class
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceSize::Mini => "mini",
            ReferenceSize::Sm => "sm",
            ReferenceSize::Reg => "reg",
            ReferenceSize::Lg => "lg",
        }
    }
}

/// Classify a height using the reference page's size names
pub fn reference_size(height: f64) -> ReferenceSize {
    if height < 24.0 {
        ReferenceSize::Mini
    } else if height < 32.0 {
        ReferenceSize::Sm
    } else if height <= 40.0 {
        ReferenceSize::Reg
    } else {
        ReferenceSize::Lg
    }
}

/// Label shown in the page text for a size
pub fn display_size(size: ReferenceSize) -> &'static str {
    match size {
        ReferenceSize::Mini => "Mini",
        ReferenceSize::Sm => "Small",
        ReferenceSize::Reg => "Regular",
        ReferenceSize::Lg => "Large",
    }
}

/// Variants known to the reference page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceVariant {
    Primary,
    Outline,
    Ghost,
}

impl ReferenceVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceVariant::Primary => "primary",
            ReferenceVariant::Outline => "outline",
            ReferenceVariant::Ghost => "ghost",
        }
    }
}

/// Infer the reference page variant for a button
///
/// The substitutions in [`patch_reference`] keep the page's own labels and
/// do not call this; it covers buttons whose label has to be guessed.
///
/// A label that already names a variant wins (primary, outline, ghost in
/// that order). Otherwise pink, blue and purple colors are primary and
/// everything else is outline.
pub fn reference_variant(color: &str, current_label: &str) -> ReferenceVariant {
    if current_label.contains("primary") {
        return ReferenceVariant::Primary;
    }
    if current_label.contains("outline") {
        return ReferenceVariant::Outline;
    }
    if current_label.contains("ghost") {
        return ReferenceVariant::Ghost;
    }

    if ["pink", "blue", "purple"].iter().any(|c| color.contains(c)) {
        ReferenceVariant::Primary
    } else {
        ReferenceVariant::Outline
    }
}

/// Result of patching a reference page
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    /// Patched document
    pub html: String,
    /// `"<variant> - <Display size>"` counts from the metadata blocks
    pub stats: Distribution,
    /// Buttons offered to the substitutions
    pub button_count: usize,
    /// Metadata blocks rewritten
    pub labels_updated: usize,
    /// Comparison labels rewritten
    pub comparison_labels_updated: usize,
    /// `<button>` class lists rewritten
    pub button_classes_updated: usize,
    /// Whether the "New Variants" counter was found
    pub counter_updated: bool,
    /// Whether a `<tbody>` was found and replaced
    pub table_updated: bool,
    /// Whether the size stylesheet was injected
    pub styles_injected: bool,
}

impl PatchOutcome {
    /// Rows of the distribution table, most frequent first
    pub fn table_rows(&self) -> Vec<DistributionEntry> {
        self.stats.sorted_by_count()
    }

    /// Buttons that found no metadata block on the page
    pub fn unmatched_buttons(&self) -> usize {
        self.button_count.saturating_sub(self.labels_updated)
    }
}

fn metadata_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<div><span class="font-bold">New \(Shadcn\):</span> (.*?) - (.*?)</div>"#)
            .expect("metadata pattern is valid")
    })
}

fn comparison_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<span class="comparison-label">New \((.*?) - (.*?)\)</span>"#)
            .expect("comparison label pattern is valid")
    })
}

fn button_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<button class="shadcn-btn shadcn-btn-(.*?) shadcn-btn-(.*?)">"#)
            .expect("button class pattern is valid")
    })
}

fn variant_counter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(<div class="text-sm text-gray-500 uppercase tracking-wider font-semibold">New Variants</div>\s*<div class="text-3xl font-bold text-green-600">)(\d+)(</div>)"#,
        )
        .expect("variant counter pattern is valid")
    })
}

fn tbody_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<tbody>.*?</tbody>").expect("tbody pattern is valid"))
}

/// Replace every match of `re`, pairing the n-th match with the n-th button
///
/// `rewrite` gets the captures and the paired button. Matches past the end
/// of the list are kept verbatim. Returns the new text and the number of
/// rewritten matches.
fn replace_positional<F>(
    re: &Regex,
    text: &str,
    buttons: &[ButtonRecord],
    mut rewrite: F,
) -> (String, usize)
where
    F: FnMut(&Captures, &ButtonRecord) -> String,
{
    let mut position = 0;
    let replaced = re.replace_all(text, |caps: &Captures| match buttons.get(position) {
        Some(button) => {
            position += 1;
            rewrite(caps, button)
        }
        None => caps[0].to_string(),
    });
    (replaced.into_owned(), position)
}

fn render_table_rows(rows: &[DistributionEntry]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                r#"
            <tr class="border-b border-gray-100">
                <td class="p-2 capitalize">{}</td>
                <td class="p-2 font-mono">{}</td>
            </tr>
           "#,
                row.key, row.count
            )
        })
        .collect()
}

/// Apply all substitutions to a reference document
pub fn patch_reference(html: &str, buttons: &[ButtonRecord]) -> PatchOutcome {
    let mut stats = Distribution::new();

    // 1. Metadata blocks, collecting statistics as we go
    let (html, labels_updated) =
        replace_positional(metadata_re(), html, buttons, |caps, button| {
            let variant = &caps[1];
            let size = display_size(reference_size(button.height));
            stats.increment(&format!("{} - {}", variant, size));
            format!(
                r#"<div><span class="font-bold">New (Shadcn):</span> {} - {}</div>"#,
                variant, size
            )
        });

    // 2. Comparison column labels
    let (html, comparison_labels_updated) =
        replace_positional(comparison_label_re(), &html, buttons, |caps, button| {
            format!(
                r#"<span class="comparison-label">New ({} - {})</span>"#,
                &caps[1],
                display_size(reference_size(button.height))
            )
        });

    // 3. Button class lists
    let (html, button_classes_updated) =
        replace_positional(button_class_re(), &html, buttons, |caps, button| {
            format!(
                r#"<button class="shadcn-btn shadcn-btn-{} shadcn-btn-{}">"#,
                &caps[1],
                reference_size(button.height).as_str()
            )
        });

    // 4. "New Variants" counter
    let counter_updated = variant_counter_re().is_match(&html);
    let variant_count = stats.len();
    let html = variant_counter_re()
        .replace(&html, |caps: &Captures| {
            format!("{}{}{}", &caps[1], variant_count, &caps[3])
        })
        .into_owned();

    // 5. Distribution table, most frequent first
    let table_updated = tbody_re().is_match(&html);
    let rows = render_table_rows(&stats.sorted_by_count());
    let html = tbody_re()
        .replace(&html, |_: &Captures| format!("<tbody>{}</tbody>", rows))
        .into_owned();

    // 6. Size stylesheet
    let styles_injected = html.contains("</head>") && !html.contains(SIZE_STYLES_MARKER);
    let html = if styles_injected {
        html.replacen("</head>", &format!("{}</head>", SIZE_STYLES), 1)
    } else {
        html
    };

    PatchOutcome {
        html,
        stats,
        button_count: buttons.len(),
        labels_updated,
        comparison_labels_updated,
        button_classes_updated,
        counter_updated,
        table_updated,
        styles_injected,
    }
}

/// Patch the reference page at `reference_path` in place
///
/// With `dry_run` the file is left untouched; the outcome is returned either way.
pub fn patch_reference_file(
    buttons_path: &Path,
    reference_path: &Path,
    dry_run: bool,
) -> Result<PatchOutcome> {
    let buttons = crate::record::load_buttons(buttons_path)?;
    let html = std::fs::read_to_string(reference_path)
        .with_context(|| format!("failed to read reference page: {}", reference_path.display()))?;

    let outcome = patch_reference(&html, &buttons);

    if !dry_run {
        crate::atomic_write(reference_path, &outcome.html)
            .with_context(|| format!("failed to write reference page: {}", reference_path.display()))?;
    }

    Ok(outcome)
}

/// Render the console summary of a patch run
pub fn render_summary(outcome: &PatchOutcome) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Labels: {}  Comparison labels: {}  Button classes: {}\n",
        outcome.labels_updated, outcome.comparison_labels_updated, outcome.button_classes_updated
    ));
    if !outcome.counter_updated {
        output.push_str("New Variants counter not found\n");
    }
    if !outcome.table_updated {
        output.push_str("Distribution table not found\n");
    }
    output.push_str("Distribution:\n");
    for row in outcome.table_rows() {
        output.push_str(&format!("  {:<24} {}\n", row.key, row.count));
    }
    output
}
