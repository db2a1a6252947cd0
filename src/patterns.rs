//! Shared regex/string heuristics used by the classifier and converters.
//!
//! Everything here is a deliberate approximation. The URL patterns are shape
//! checks, not RFC parsing; the tag stripper is not an HTML parser and only
//! knows the handful of tags and entities the converters special-case.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme-qualified URL: `http`, `https` or `ftp` with a dotted host and an
/// optional path/query/fragment, anchored start to end.
static SCHEME_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:https?|ftp)://[\w.-]+(?:\.[\w.-]+)+(?:[/?#]\S*)?$").unwrap());

/// Bare domain with a 2+ letter TLD and optional path, anchored start to end.
static BARE_DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+\.[a-zA-Z]{2,}(?:/\S*)?$").unwrap());

/// Any remaining markup tag; whatever it is, it gets blindly stripped.
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Delimiters the table heuristic tries, in priority order.
pub(crate) const DELIMITERS: [char; 3] = ['\t', ',', '|'];

/// Keywords that count as a code signal. Trailing spaces are part of the
/// signal so prose like "structure" does not match.
pub(crate) const CODE_KEYWORDS: &[&str] = &[
    "func ", "class ", "struct ", "import ", "public ", "private ", "def ", "for ", "if ", "var ",
    "let ", "const ", "#include",
];

/// The minimal entity set the converters decode. `&amp;` is decoded last so
/// that `&amp;lt;` does not collapse twice.
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&amp;", "&"),
];

/// True when the text looks like a URL: either scheme-qualified or a bare
/// domain form.
pub fn is_likely_url(text: &str) -> bool {
    SCHEME_URL.is_match(text) || BARE_DOMAIN.is_match(text)
}

/// Code heuristic. Multi-line is mandatory; a single-line snippet never
/// classifies as code no matter how code-shaped it is.
pub fn looks_like_code(text: &str) -> bool {
    if !text.contains('\n') {
        return false;
    }
    let has_braces = text.contains('{') || text.contains('}');
    let has_semicolons = text.contains(';');
    let has_keywords = CODE_KEYWORDS.iter().any(|kw| text.contains(kw));
    let has_indent = text
        .lines()
        .any(|line| line.starts_with("  ") || line.starts_with('\t'));
    has_braces || has_semicolons || has_keywords || has_indent
}

/// Cheap JSON shape check: trimmed text opens and closes a matching
/// `{…}` or `[…]` pair. Syntactic validity is checked separately.
pub fn has_json_shape(text: &str) -> bool {
    let trimmed = text.trim();
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}

/// Replace every remaining tag with a space.
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, " ").into_owned()
}

/// Decode the minimal entity set. Unknown entities pass through untouched.
pub fn decode_entities(text: &str) -> String {
    let mut out = text.to_string();
    for (entity, replacement) in ENTITIES {
        out = out.replace(entity, replacement);
    }
    out
}
