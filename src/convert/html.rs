//! HTML to plain text, by tag scraping.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::patterns;

static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
static STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
static BR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static P_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</p>").unwrap());

/// Tag-stripping HTML to text: script/style blocks are dropped, `<br>` maps
/// to a newline and `</p>` to a blank line, all remaining tags are stripped,
/// the minimal entity set is decoded, and whitespace runs (newlines
/// included) collapse into single spaces.
pub fn html_to_plain(html: &str) -> String {
    let text = SCRIPT.replace_all(html, " ");
    let text = STYLE.replace_all(&text, " ");
    let text = BR.replace_all(&text, "\n");
    let text = P_CLOSE.replace_all(&text, "\n\n");
    let text = patterns::strip_tags(&text);
    let text = patterns::decode_entities(&text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_collapses_whitespace() {
        assert_eq!(html_to_plain("<p>Hello   <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_script_and_style_blocks_removed() {
        let html = "<style>p { color: red }</style><p>keep</p><script>alert('x')</script>";
        assert_eq!(html_to_plain(html), "keep");
    }

    #[test]
    fn test_script_removed_across_lines() {
        let html = "<SCRIPT>\nvar x = 1;\n</SCRIPT>after";
        assert_eq!(html_to_plain(html), "after");
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(html_to_plain("a &amp; b &lt;c&gt;"), "a & b <c>");
    }

    #[test]
    fn test_br_and_p_become_whitespace() {
        // Line breaks are reintroduced then collapsed with the rest.
        assert_eq!(html_to_plain("one<br/>two</p>three"), "one two three");
    }

    #[test]
    fn test_empty_html_yields_empty_string() {
        assert_eq!(html_to_plain("<div></div>"), "");
    }
}
