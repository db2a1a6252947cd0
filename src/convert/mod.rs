//! Converters applied by transform recipes.

pub mod code;
pub mod html;
pub mod json;
pub mod text;
pub mod url;
