//! Content classification.

use crate::content::ContentType;
use crate::patterns;
use crate::snapshot::ClipboardSnapshot;
use crate::table;

/// Classify one snapshot. Total, deterministic and side-effect free.
///
/// First match wins, and the order is a correctness contract, not an
/// optimization: an HTML `<table` beats a URL-shaped plain text, and the URL
/// check beats the delimiter-table check even for inputs that satisfy both.
pub fn classify(snapshot: &ClipboardSnapshot) -> ContentType {
    let content = classify_inner(snapshot);
    #[cfg(feature = "logging")]
    tracing::debug!(content = %content, "classified clipboard snapshot");
    content
}

fn classify_inner(snapshot: &ClipboardSnapshot) -> ContentType {
    if let Some(html) = snapshot.html.as_deref() {
        if html.to_lowercase().contains("<table") {
            return ContentType::Table;
        }
    }
    if let Some(plain) = snapshot.trimmed_plain() {
        if patterns::is_likely_url(plain) {
            return ContentType::Url;
        }
        if table::detect_delimiter(plain).is_some() {
            return ContentType::Table;
        }
        if patterns::looks_like_code(plain) {
            return ContentType::Code;
        }
        if snapshot.html.is_some() {
            return ContentType::Html;
        }
        return ContentType::Plain;
    }
    if snapshot.html.is_some() {
        ContentType::Html
    } else {
        ContentType::Plain
    }
}
