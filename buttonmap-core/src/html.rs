//! HTML dashboard generation
//!
//! Generates a self-contained HTML page with embedded CSS. The page works
//! offline and needs no build step.

use crate::analysis::Analysis;
use crate::classify::ClassifiedButton;
use crate::report::format_height;
use crate::size::SizeCategory;
use crate::style::button_classes;
use crate::variant::Variant;

/// Render an analysis as an HTML dashboard
pub fn render_html_dashboard(analysis: &Analysis) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Button Migration Analysis</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        {showcase}
        {stats}
        {buttons}
        {footer}
    </div>
</body>
</html>"#,
        css = inline_css(),
        header = render_header(),
        showcase = render_size_showcase(),
        stats = render_stats(analysis),
        buttons = render_button_list(&analysis.buttons),
        footer = render_footer(),
    )
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    background: #f8f8f9;
    color: #4b4b55;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
}
.container { max-width: 1200px; margin: 0 auto; padding: 32px; }
header h1 { margin: 0 0 8px; font-size: 30px; color: #2f2f36; }
header p { margin: 0 0 32px; color: #8a8a94; }
.section {
    background: #fff;
    border: 1px solid #e4e4e8;
    border-radius: 12px;
    padding: 24px;
    margin-bottom: 32px;
}
.section h2 { margin: 0 0 24px; font-size: 20px; color: #2f2f36; }
.size-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; }
.size-cell .preview { height: 48px; display: flex; align-items: center; }
.size-cell p { font-size: 12px; color: #8a8a94; line-height: 1.6; }
.stat-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 24px; }
.stat-card { background: #f8f8f9; border: 1px solid #efeff2; border-radius: 8px; padding: 16px; }
.stat-label { font-size: 14px; color: #8a8a94; }
.stat-value { font-size: 36px; font-weight: 700; color: #2f2f36; }
h3 { font-size: 14px; text-transform: uppercase; letter-spacing: 0.05em; }
table { width: 100%; border-collapse: collapse; border: 1px solid #e4e4e8; }
th { background: #f8f8f9; font-size: 12px; color: #8a8a94; text-transform: uppercase; padding: 12px 24px; text-align: left; }
td { padding: 16px 24px; border-top: 1px solid #e4e4e8; font-size: 14px; }
.num { text-align: right; }
.capitalize { text-transform: capitalize; }
.card {
    display: flex;
    gap: 24px;
    align-items: center;
    justify-content: space-between;
    background: #fff;
    border: 1px solid #e4e4e8;
    border-radius: 12px;
    padding: 24px;
    margin-bottom: 16px;
}
.card .meta { flex: 1; min-width: 0; }
.card .id { font-weight: 700; font-size: 18px; color: #2f2f36; margin-right: 8px; }
.badge { padding: 2px 8px; border-radius: 4px; font-size: 12px; font-weight: 500; }
.badge-mini { background: #fef2f2; color: #dc2626; }
.badge-small { background: #fff7ed; color: #ea580c; }
.badge-ok { background: #f0fdf4; color: #16a34a; }
.detail { font-size: 14px; color: #8a8a94; margin-top: 4px; }
code { background: #f8f8f9; padding: 0 4px; border-radius: 4px; font-size: 12px; }
.new-system { margin-top: 8px; font-size: 14px; font-weight: 500; color: #3b82f6; }
.compare { border-left: 1px solid #efeff2; padding-left: 32px; text-align: center; }
.compare-label { font-size: 12px; color: #b4b4bc; font-weight: 600; text-transform: uppercase; margin-bottom: 8px; }
button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border-radius: 8px;
    font-weight: 500;
    cursor: pointer;
    border: 1px solid transparent;
}
.bg-pink-200 { background: #f9a8d4; color: #fff; }
.bg-neutrals-0 { background: #fff; color: #4b4b55; border-color: #e4e4e8; }
.bg-transparent { background: transparent; color: #4b4b55; }
.btn-mini { height: 20px; padding: 0 8px; font-size: 12px; }
.btn-small { height: 28px; padding: 0 12px; font-size: 14px; }
.btn-regular { height: 36px; padding: 0 16px; font-size: 14px; }
.btn-large { height: 44px; padding: 0 24px; font-size: 16px; }
footer { text-align: center; color: #b4b4bc; font-size: 12px; padding: 16px; }
"#
}

fn render_header() -> String {
    r#"<header>
    <h1>Button Migration Analysis</h1>
    <p>Normalization of legacy button styles to the new system based on height rules.</p>
</header>"#
        .to_string()
}

/// Render the four new sizes with their rules
fn render_size_showcase() -> String {
    let cells: String = SizeCategory::ALL
        .iter()
        .map(|size| {
            let (px, token) = size.nominal_height();
            format!(
                r#"<div class="size-cell">
    <div class="preview">{button}</div>
    <p>Size: <strong>{label}</strong><br>Height: {px}px ({token})<br>Rule: {rule}</p>
</div>"#,
                button = render_button(
                    Variant::Primary,
                    *size,
                    &format!("{} Button", size.label())
                ),
                label = size.label(),
                px = px,
                token = token,
                rule = html_escape(size.rule()),
            )
        })
        .collect();

    format!(
        r#"<section class="section">
    <h2>New Button Sizes</h2>
    <div class="size-grid">
        {cells}
    </div>
</section>"#,
        cells = cells,
    )
}

/// Render summary counters and the distribution table (first-occurrence order)
fn render_stats(analysis: &Analysis) -> String {
    let rows: String = analysis
        .distribution
        .entries()
        .iter()
        .map(|entry| {
            format!(
                r#"<tr>
    <td class="capitalize">{key}</td>
    <td class="num">{count}</td>
</tr>"#,
                key = html_escape(&entry.key),
                count = entry.count,
            )
        })
        .collect();

    format!(
        r#"<section class="section">
    <div class="stat-grid">
        <div class="stat-card">
            <div class="stat-label">Original Variables</div>
            <div class="stat-value">{total}</div>
        </div>
        <div class="stat-card">
            <div class="stat-label">New Variants</div>
            <div class="stat-value">{variants}</div>
        </div>
    </div>
    <h3>Active Variants Distribution</h3>
    <table id="distribution-table">
        <thead>
            <tr>
                <th>Variant</th>
                <th class="num">Count</th>
            </tr>
        </thead>
        <tbody>
            {rows}
        </tbody>
    </table>
</section>"#,
        total = analysis.total(),
        variants = analysis.variant_count(),
        rows = rows,
    )
}

/// Badge color reflects how far the button shrank: mini red, small orange
fn badge_class(size: SizeCategory) -> &'static str {
    match size {
        SizeCategory::Mini => "badge badge-mini",
        SizeCategory::Small => "badge badge-small",
        SizeCategory::Regular | SizeCategory::Large => "badge badge-ok",
    }
}

fn or_na(s: &str) -> &str {
    if s.is_empty() {
        "N/A"
    } else {
        s
    }
}

fn render_button_list(buttons: &[ClassifiedButton]) -> String {
    buttons
        .iter()
        .map(|button| {
            format!(
                r#"<div class="card" data-size="{size}" data-variant="{variant}">
    <div class="meta">
        <div><span class="id">{id}</span><span class="{badge}">Height: {height}px</span></div>
        <div class="detail"><strong>Original ClassName:</strong> <code>{class_name}</code></div>
        <div class="detail"><strong>Original Color:</strong> {color}</div>
        <div class="new-system">New System: {variant} - {size}</div>
    </div>
    <div class="compare">
        <div class="compare-label">New Component</div>
        {preview}
    </div>
</div>"#,
                id = html_escape(&button.record.id),
                badge = badge_class(button.size),
                height = format_height(button.record.height),
                class_name = html_escape(or_na(&button.record.class_name)),
                color = html_escape(or_na(&button.record.color)),
                variant = button.variant,
                size = button.size,
                preview = render_button(button.variant, button.size, "Lorem, ipsum dolor"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_button(variant: Variant, size: SizeCategory, text: &str) -> String {
    format!(
        r#"<button type="button" class="{classes}">{text}</button>"#,
        classes = button_classes(variant, size),
        text = html_escape(text),
    )
}

/// Render footer
fn render_footer() -> String {
    r#"<footer>
    <p>Generated by buttonmap</p>
</footer>"#
        .to_string()
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ButtonRecord;

    fn analysis() -> Analysis {
        Analysis::new(&[
            ButtonRecord::new("A", 20.0, "", ""),
            ButtonRecord::new("B", 36.0, "pink-200", ""),
            ButtonRecord::new("C", 45.0, "", "bg-transparent"),
            ButtonRecord::new("D", 22.0, "", ""),
        ])
    }

    #[test]
    fn test_dashboard_contains_sections() {
        let html = render_html_dashboard(&analysis());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("New Button Sizes"));
        assert!(html.contains("Active Variants Distribution"));
        assert!(html.contains(r#"<div class="stat-value">4</div>"#));
        assert!(html.contains(r#"<div class="stat-value">3</div>"#));
        assert!(html.contains("Rule: &lt; 24px"));
    }

    #[test]
    fn test_distribution_rows_keep_first_occurrence_order() {
        let html = render_html_dashboard(&analysis());
        let mini = html.find(">secondary - mini<").unwrap();
        let regular = html.find(">primary - regular<").unwrap();
        let large = html.find(">ghost - large<").unwrap();
        assert!(mini < regular && regular < large);
    }

    #[test]
    fn test_cards_show_na_for_empty_fields() {
        let html = render_html_dashboard(&analysis());
        assert!(html.contains("<code>N/A</code>"));
        assert!(html.contains("New System: ghost - large"));
        assert!(html.contains(r#"<span class="badge badge-mini">Height: 20px</span>"#));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let analysis = Analysis::new(&[ButtonRecord::new("<x>", 30.0, "a&b", "\"q\"")]);
        let html = render_html_dashboard(&analysis);
        assert!(html.contains("&lt;x&gt;"));
        assert!(html.contains("a&amp;b"));
        assert!(html.contains("&quot;q&quot;"));
        assert!(!html.contains("<x>"));
    }

    #[test]
    fn test_preview_uses_component_classes() {
        let html = render_html_dashboard(&analysis());
        assert!(html.contains("bg-transparent text-neutrals-500"));
        assert!(html.contains("btn-large text-base font-medium"));
    }
}
