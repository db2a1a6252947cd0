//! Delimiter-table heuristic shared by the classifier and the extractors.

use super::TableRows;
use crate::patterns::DELIMITERS;

/// Lines that are non-empty after trimming; blank lines never count toward
/// the table shape.
fn content_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Split on a delimiter, dropping empty fields so leading/trailing delimiters
/// (e.g. `|a|b|`) do not inflate the count.
fn split_line(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).filter(|field| !field.is_empty()).collect()
}

/// First delimiter in {tab, comma, pipe} under which every line yields the
/// same field count > 1. Requires at least two lines.
pub fn detect_delimiter(text: &str) -> Option<char> {
    let lines = content_lines(text);
    if lines.len() < 2 {
        return None;
    }
    DELIMITERS.iter().copied().find(|&delimiter| {
        let first = split_line(lines[0], delimiter).len();
        first > 1
            && lines
                .iter()
                .all(|line| split_line(line, delimiter).len() == first)
    })
}

/// Extract rows using the detected delimiter; cells are trimmed. `None` when
/// the delimiter heuristic fails.
pub fn extract_delimited(text: &str) -> Option<TableRows> {
    let delimiter = detect_delimiter(text)?;
    let rows = content_lines(text)
        .iter()
        .map(|line| {
            split_line(line, delimiter)
                .iter()
                .map(|field| field.trim().to_string())
                .collect()
        })
        .collect();
    Some(TableRows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_tab_before_comma() {
        assert_eq!(detect_delimiter("a\tb\n1\t2"), Some('\t'));
        assert_eq!(detect_delimiter("a,b\n1,2"), Some(','));
        assert_eq!(detect_delimiter("a|b\n1|2"), Some('|'));
    }

    #[test]
    fn test_single_line_is_not_a_table() {
        assert_eq!(detect_delimiter("a,b,c"), None);
    }

    #[test]
    fn test_inconsistent_counts_are_not_a_table() {
        assert_eq!(detect_delimiter("a,b\n1,2,3"), None);
    }

    #[test]
    fn test_single_column_is_not_a_table() {
        assert_eq!(detect_delimiter("alpha\nbeta"), None);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(detect_delimiter("a,b\n\n1,2\n"), Some(','));
    }

    #[test]
    fn test_extract_trims_cells() {
        let rows = extract_delimited("a , b\n1 , 2").unwrap();
        assert_eq!(
            rows.rows(),
            &[
                vec!["a".to_string(), "b".to_string()],
                vec!["1".to_string(), "2".to_string()],
            ]
        );
    }

    #[test]
    fn test_extract_pipe_table_edges() {
        let rows = extract_delimited("|a|b|\n|1|2|").unwrap();
        assert_eq!(rows.column_count(), 2);
    }
}
