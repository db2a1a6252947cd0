//! # smartpaste-core
//!
//! Pure classification and transform pipeline behind SmartPaste.
//!
//! This crate contains the whole decision chain from a captured clipboard
//! payload to a replacement string: content classification, recipe
//! selection for the destination app, and the transforms themselves
//! (table codec, link cleaning, code fencing, JSON pretty-printing, text
//! reshaping). It is stateless and synchronous; every invocation works on a
//! fresh [`ClipboardSnapshot`] and returns before anything else happens.
//!
//! OS integration is deliberately absent. Reading the clipboard, hotkeys,
//! paste injection, accessibility prompts and UI live in the host
//! application, which calls [`pipeline::run`] (or [`pipeline::run_with_recipe`]
//! for an explicit override) and delivers the result.

// Public module exports
pub mod classify;
pub mod content;
pub mod convert;
pub mod dispatch;
pub mod patterns;
pub mod pipeline;
pub mod recipe;
pub mod snapshot;
pub mod suggest;
pub mod table;

// Re-export commonly used types at the crate root
pub use classify::classify;
pub use content::ContentType;
pub use pipeline::{run, run_with_recipe, PasteDecision};
pub use recipe::{Recipe, RecipeParseError};
pub use snapshot::{ClipboardSnapshot, DestinationContext};
pub use suggest::SuggestionState;
pub use table::TableRows;
