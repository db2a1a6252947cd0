//! Input model: what the caller captured from the clipboard and where the
//! result is going.

use serde::{Deserialize, Serialize};

/// One clipboard observation: the plain-text and HTML representations of a
/// single copy event, captured atomically by the host application.
///
/// At least one channel should be present for a useful result. The snapshot is
/// immutable; every pipeline invocation gets its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    pub plain: Option<String>,
    pub html: Option<String>,
}

impl ClipboardSnapshot {
    pub fn new(plain: Option<String>, html: Option<String>) -> Self {
        Self { plain, html }
    }

    pub fn from_plain(text: impl Into<String>) -> Self {
        Self {
            plain: Some(text.into()),
            html: None,
        }
    }

    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            plain: None,
            html: Some(html.into()),
        }
    }

    /// Trimmed plain text, `None` when absent or whitespace-only.
    pub fn trimmed_plain(&self) -> Option<&str> {
        self.plain
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_none() && self.html.is_none()
    }
}

/// Identifies the application the result will be pasted into, e.g. a bundle
/// or package id. Opaque: only ever substring-matched, never parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DestinationContext {
    pub app_id: String,
}

impl DestinationContext {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }
}

impl From<&str> for DestinationContext {
    fn from(app_id: &str) -> Self {
        Self::new(app_id)
    }
}
