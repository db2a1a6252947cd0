//! Transform recipes: the public vocabulary of the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::content::ContentType;
use crate::convert::json;
use crate::snapshot::DestinationContext;

/// Destination app-id fragments that prefer CSV tables.
const CSV_DESTINATIONS: &[&str] = &["excel", "numbers"];

/// Destination app-id fragments that prefer Markdown tables.
const MARKDOWN_DESTINATIONS: &[&str] =
    &["notion", "obsidian", "bear", "typora", "markdown", "notes"];

/// A named transform strategy.
///
/// The kebab-case wire names and the display labels are public contract: the
/// host application enumerates them for its override menu, so both must stay
/// stable across releases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Recipe {
    SmartLink,
    TableCsv,
    TableMd,
    CodeFence,
    Plain,
    Bullets,
    OneLine,
    JsonPretty,
}

impl Recipe {
    /// The full catalogue, in menu order.
    pub const ALL: [Recipe; 8] = [
        Recipe::SmartLink,
        Recipe::TableCsv,
        Recipe::TableMd,
        Recipe::CodeFence,
        Recipe::Plain,
        Recipe::Bullets,
        Recipe::OneLine,
        Recipe::JsonPretty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Recipe::SmartLink => "smart-link",
            Recipe::TableCsv => "table-csv",
            Recipe::TableMd => "table-md",
            Recipe::CodeFence => "code-fence",
            Recipe::Plain => "plain",
            Recipe::Bullets => "bullets",
            Recipe::OneLine => "one-line",
            Recipe::JsonPretty => "json-pretty",
        }
    }

    /// Fixed human-readable label for UI presentation.
    pub fn label(&self) -> &'static str {
        match self {
            Recipe::SmartLink => "clean link",
            Recipe::TableCsv => "CSV table",
            Recipe::TableMd => "Markdown table",
            Recipe::CodeFence => "code block",
            Recipe::Plain => "plain text",
            Recipe::Bullets => "bullet list",
            Recipe::OneLine => "single line",
            Recipe::JsonPretty => "pretty JSON",
        }
    }

    /// Pick the recipe for a classified snapshot and destination.
    ///
    /// `plain` is consulted only for the JSON probe on [`ContentType::Plain`];
    /// the destination is consulted only for tables, via case-insensitive
    /// substring matches on the app id.
    pub fn select(content: ContentType, ctx: &DestinationContext, plain: Option<&str>) -> Recipe {
        match content {
            ContentType::Url => Recipe::SmartLink,
            ContentType::Table => {
                let app_id = ctx.app_id.to_lowercase();
                if CSV_DESTINATIONS.iter().any(|hint| app_id.contains(hint)) {
                    Recipe::TableCsv
                } else if MARKDOWN_DESTINATIONS.iter().any(|hint| app_id.contains(hint)) {
                    Recipe::TableMd
                } else {
                    Recipe::TableCsv
                }
            }
            ContentType::Code => Recipe::CodeFence,
            ContentType::Html => Recipe::Plain,
            ContentType::Plain => match plain {
                Some(text) if json::is_json(text) => Recipe::JsonPretty,
                _ => Recipe::Plain,
            },
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown recipe name supplied by a caller (e.g. from an override menu).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown recipe name: {0}")]
pub struct RecipeParseError(pub String);

impl FromStr for Recipe {
    type Err = RecipeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Recipe::ALL
            .iter()
            .copied()
            .find(|recipe| recipe.as_str() == s)
            .ok_or_else(|| RecipeParseError(s.to_string()))
    }
}
