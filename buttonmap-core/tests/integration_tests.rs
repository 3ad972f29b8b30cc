//! Integration tests for button analysis and reference patching

use buttonmap_core::html::render_html_dashboard;
use buttonmap_core::reference::{patch_reference, patch_reference_file};
use buttonmap_core::{analyze, load_buttons, render_json, Analysis, SizeCategory, Variant};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_analysis() -> Analysis {
    analyze(&fixture_path("buttons.json")).unwrap()
}

#[test]
fn test_fixture_classification() {
    let analysis = fixture_analysis();
    let got: Vec<(&str, Variant, SizeCategory)> = analysis
        .buttons
        .iter()
        .map(|b| (b.record.id.as_str(), b.variant, b.size))
        .collect();

    assert_eq!(
        got,
        vec![
            ("LoginSubmit", Variant::Primary, SizeCategory::Regular),
            ("HeaderMenu", Variant::Ghost, SizeCategory::Small),
            ("TagRemove", Variant::Ghost, SizeCategory::Mini),
            ("DialogCancel", Variant::Secondary, SizeCategory::Regular),
            ("CheckoutPay", Variant::Primary, SizeCategory::Large),
            ("TableAction", Variant::Secondary, SizeCategory::Small),
            ("ToastClose", Variant::Secondary, SizeCategory::Mini),
            ("WizardNext", Variant::Secondary, SizeCategory::Regular),
        ]
    );
}

#[test]
fn test_fixture_distribution() {
    let analysis = fixture_analysis();
    let entries: Vec<(&str, usize)> = analysis
        .distribution
        .entries()
        .iter()
        .map(|e| (e.key.as_str(), e.count))
        .collect();

    assert_eq!(
        entries,
        vec![
            ("primary - regular", 1),
            ("ghost - small", 1),
            ("ghost - mini", 1),
            ("secondary - regular", 2),
            ("primary - large", 1),
            ("secondary - small", 1),
            ("secondary - mini", 1),
        ]
    );
    assert_eq!(analysis.distribution.total(), analysis.total());
}

#[test]
fn test_analysis_is_repeatable() {
    let first = fixture_analysis();
    let second = fixture_analysis();
    assert_eq!(first, second);
    assert_eq!(render_json(&first), render_json(&second));
    assert_eq!(render_html_dashboard(&first), render_html_dashboard(&second));
}

#[test]
fn test_reference_fixture_patch() {
    let buttons = load_buttons(&fixture_path("buttons.json")).unwrap();
    let html = std::fs::read_to_string(fixture_path("reference.html")).unwrap();

    let outcome = patch_reference(&html, &buttons);

    assert_eq!(outcome.labels_updated, 8);
    assert_eq!(outcome.comparison_labels_updated, 8);
    assert_eq!(outcome.button_classes_updated, 8);

    // the page's own "secondary" label survives; only the size changes
    assert!(outcome
        .html
        .contains(r#"<span class="comparison-label">New (secondary - Regular)</span>"#));
    assert!(outcome
        .html
        .contains(r#"<button class="shadcn-btn shadcn-btn-secondary shadcn-btn-reg">Cancel</button>"#));
    assert!(outcome
        .html
        .contains(r#"<button class="shadcn-btn shadcn-btn-outline shadcn-btn-mini">Remove</button>"#));

    // the ninth block has no button and stays as authored
    assert!(outcome
        .html
        .contains(r#"<button class="shadcn-btn shadcn-btn-outline shadcn-btn-sm">Orphan</button>"#));

    let rows: Vec<(String, usize)> = outcome
        .table_rows()
        .into_iter()
        .map(|r| (r.key, r.count))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("primary - Regular".to_string(), 2),
            ("ghost - Small".to_string(), 1),
            ("outline - Mini".to_string(), 1),
            ("secondary - Regular".to_string(), 1),
            ("primary - Large".to_string(), 1),
            ("outline - Small".to_string(), 1),
            ("ghost - Mini".to_string(), 1),
        ]
    );
    assert!(outcome
        .html
        .contains(r#"<div class="text-3xl font-bold text-green-600">7</div>"#));
    assert!(outcome.styles_injected);
}

#[test]
fn test_reference_file_roundtrip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("index.html");
    std::fs::copy(fixture_path("reference.html"), &page).unwrap();

    let first = patch_reference_file(&fixture_path("buttons.json"), &page, false).unwrap();
    let on_disk = std::fs::read_to_string(&page).unwrap();
    assert_eq!(on_disk, first.html);

    // a second run finds nothing left to change
    let second = patch_reference_file(&fixture_path("buttons.json"), &page, false).unwrap();
    assert_eq!(second.html, on_disk);
    assert!(!second.styles_injected);
}
