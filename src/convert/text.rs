//! Plain-text reshaping: bullet lists and one-line flattening.

/// Prefix every non-empty trimmed line with `- `. `None` when there is no
/// content to bullet.
pub fn bullets(text: &str) -> Option<String> {
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("- {line}"))
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Collapse all whitespace runs, newlines included, into single spaces.
/// `None` when the text is entirely whitespace.
pub fn one_line(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_skip_blank_lines() {
        assert_eq!(
            bullets("one\n\n  two  \nthree").as_deref(),
            Some("- one\n- two\n- three")
        );
    }

    #[test]
    fn test_bullets_empty_input() {
        assert_eq!(bullets("\n  \n"), None);
    }

    #[test]
    fn test_one_line_collapses_everything() {
        assert_eq!(one_line("a\nb\t c   d").as_deref(), Some("a b c d"));
        assert_eq!(one_line("   "), None);
    }
}
