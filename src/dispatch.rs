//! Transform dispatch with per-recipe fallback chains.

use crate::convert::{code, html, json, text, url};
use crate::patterns;
use crate::recipe::Recipe;
use crate::snapshot::ClipboardSnapshot;
use crate::table;

/// Apply one recipe to a snapshot.
///
/// `None` means "nothing to do": the caller must leave the clipboard
/// untouched and perform no injection. It is never a failure.
///
/// Recipes that merely clean content (`smart-link`, `table-csv`, `table-md`,
/// `plain`, `json-pretty`) ultimately fall back to the untouched plain text.
/// Recipes that change form (`code-fence`, `bullets`, `one-line`) return
/// `None` instead, since a pass-through would be misleading there.
pub fn apply(recipe: Recipe, snapshot: &ClipboardSnapshot) -> Option<String> {
    let output = match recipe {
        Recipe::SmartLink => smart_link(snapshot),
        Recipe::TableCsv => table_csv(snapshot),
        Recipe::TableMd => table_markdown(snapshot),
        Recipe::CodeFence => code_fence(snapshot),
        Recipe::Plain => plain_text(snapshot),
        Recipe::Bullets => bullets(snapshot),
        Recipe::OneLine => one_line(snapshot),
        Recipe::JsonPretty => json_pretty(snapshot),
    };
    #[cfg(feature = "logging")]
    tracing::debug!(recipe = %recipe, produced = output.is_some(), "applied transform recipe");
    output
}

fn smart_link(snapshot: &ClipboardSnapshot) -> Option<String> {
    if let Some(plain) = snapshot.trimmed_plain() {
        return Some(url::strip_trackers(plain));
    }
    if let Some(markup) = snapshot.html.as_deref() {
        let derived = html::html_to_plain(markup);
        if patterns::is_likely_url(&derived) {
            return Some(url::strip_trackers(&derived));
        }
    }
    snapshot.plain.clone()
}

fn table_csv(snapshot: &ClipboardSnapshot) -> Option<String> {
    if let Some(rows) = snapshot.html.as_deref().and_then(table::extract_html_table) {
        return Some(table::render_csv(&rows));
    }
    if let Some(rows) = snapshot.plain.as_deref().and_then(table::extract_delimited) {
        return Some(table::render_csv(&rows));
    }
    snapshot.plain.clone()
}

/// Row sources are tried in a fixed cascade; the trailing CSV round-trips are
/// redundant with the direct extractions but kept as a best-effort net for
/// inputs the direct path mangles.
fn table_markdown(snapshot: &ClipboardSnapshot) -> Option<String> {
    let rows = snapshot
        .html
        .as_deref()
        .and_then(table::extract_html_table)
        .or_else(|| snapshot.plain.as_deref().and_then(table::extract_delimited))
        .or_else(|| {
            snapshot.plain.as_deref().and_then(|plain| {
                table::extract_delimited(plain)
                    .map(|rows| table::parse_csv(&table::render_csv(&rows)))
            })
        })
        .or_else(|| {
            snapshot.html.as_deref().and_then(|markup| {
                table::extract_html_table(markup)
                    .map(|rows| table::parse_csv(&table::render_csv(&rows)))
            })
        });
    match rows {
        Some(rows) => table::render_markdown(&rows).or_else(|| snapshot.plain.clone()),
        None => snapshot.plain.clone(),
    }
}

fn code_fence(snapshot: &ClipboardSnapshot) -> Option<String> {
    if snapshot.trimmed_plain().is_some() {
        // Fence the original body, not the trimmed probe.
        return snapshot.plain.as_deref().map(code::fence);
    }
    if let Some(markup) = snapshot.html.as_deref() {
        let derived = html::html_to_plain(markup);
        if !derived.is_empty() {
            return Some(code::fence(&derived));
        }
    }
    None
}

fn plain_text(snapshot: &ClipboardSnapshot) -> Option<String> {
    if let Some(markup) = snapshot.html.as_deref() {
        let derived = html::html_to_plain(markup);
        if !derived.is_empty() {
            return Some(derived);
        }
    }
    snapshot.plain.clone()
}

fn bullets(snapshot: &ClipboardSnapshot) -> Option<String> {
    if let Some(out) = snapshot.plain.as_deref().and_then(text::bullets) {
        return Some(out);
    }
    snapshot
        .html
        .as_deref()
        .and_then(|markup| text::bullets(&html::html_to_plain(markup)))
}

fn one_line(snapshot: &ClipboardSnapshot) -> Option<String> {
    if let Some(out) = snapshot.plain.as_deref().and_then(text::one_line) {
        return Some(out);
    }
    snapshot
        .html
        .as_deref()
        .and_then(|markup| text::one_line(&html::html_to_plain(markup)))
}

fn json_pretty(snapshot: &ClipboardSnapshot) -> Option<String> {
    if let Some(out) = snapshot.trimmed_plain().and_then(json::pretty_print) {
        return Some(out);
    }
    if let Some(markup) = snapshot.html.as_deref() {
        let derived = html::html_to_plain(markup);
        if let Some(out) = json::pretty_print(&derived) {
            return Some(out);
        }
    }
    snapshot.plain.clone()
}
