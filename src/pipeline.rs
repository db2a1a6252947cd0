//! The full pipeline in one call: classify, select, apply.

use crate::classify::classify;
use crate::content::ContentType;
use crate::dispatch;
use crate::recipe::Recipe;
use crate::snapshot::{ClipboardSnapshot, DestinationContext};

/// Outcome of one paste event: what the snapshot was classified as, which
/// recipe was chosen, and the replacement text, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteDecision {
    pub content: ContentType,
    pub recipe: Recipe,
    pub output: Option<String>,
}

impl PasteDecision {
    /// False means "nothing to do": leave the clipboard untouched, inject
    /// nothing.
    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }
}

/// Classify the snapshot, select a recipe for the destination, and apply it.
///
/// An empty transform result is normalized to `None`, so callers only ever
/// see text worth delivering.
pub fn run(snapshot: &ClipboardSnapshot, ctx: &DestinationContext) -> PasteDecision {
    let content = classify(snapshot);
    let recipe = Recipe::select(content, ctx, snapshot.trimmed_plain());
    let output = dispatch::apply(recipe, snapshot).filter(|text| !text.is_empty());
    #[cfg(feature = "logging")]
    tracing::debug!(
        content = %content,
        recipe = %recipe,
        produced = output.is_some(),
        "smart paste decision"
    );
    PasteDecision {
        content,
        recipe,
        output,
    }
}

/// Apply a caller-chosen recipe directly, bypassing classification and
/// selection. This backs the explicit override menu.
pub fn run_with_recipe(recipe: Recipe, snapshot: &ClipboardSnapshot) -> Option<String> {
    dispatch::apply(recipe, snapshot).filter(|text| !text.is_empty())
}
