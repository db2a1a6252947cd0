//! Content classification result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of content a snapshot holds. Exactly one value per snapshot.
///
/// Declaration order mirrors classification priority and is part of the
/// contract; see [`crate::classify::classify`] for the evaluation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Url,
    Html,
    Table,
    Code,
    Plain,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Url => "url",
            ContentType::Html => "html",
            ContentType::Table => "table",
            ContentType::Code => "code",
            ContentType::Plain => "plain",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
