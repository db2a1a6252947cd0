//! HTML table scraping.
//!
//! Regex tag-scraping, on purpose. Only `<tr>`, `<td>` and `<th>` are
//! recognized; nested tags inside a cell are blindly stripped. Do not replace
//! this with a real HTML parser: the approximation is part of the contract.

use once_cell::sync::Lazy;
use regex::Regex;

use super::TableRows;
use crate::patterns;

static ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap());
static CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:td|th)[^>]*>(.*?)</(?:td|th)>").unwrap());

/// Scrape `<tr>`/`<td>`/`<th>` rows out of an HTML fragment. Rows with no
/// extracted cells are dropped; `None` when no table is found at all.
pub fn extract_html_table(html: &str) -> Option<TableRows> {
    if !html.to_lowercase().contains("<table") {
        return None;
    }
    // Cell content should stay single-line even when the markup wraps.
    let flattened = html.replace('\n', " ");

    let mut rows: Vec<Vec<String>> = Vec::new();
    for row in ROW.captures_iter(&flattened) {
        let mut cells = Vec::new();
        for cell in CELL.captures_iter(&row[1]) {
            let stripped = patterns::strip_tags(&cell[1]);
            let decoded = patterns::decode_entities(&stripped);
            cells.push(decoded.trim().to_string());
        }
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    if rows.is_empty() {
        None
    } else {
        Some(TableRows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_td_and_th() {
        let html = "<table><tr><th>a</th><th>b</th></tr><tr><td>1</td><td>2</td></tr></table>";
        let rows = extract_html_table(html).unwrap();
        assert_eq!(
            rows.rows(),
            &[
                vec!["a".to_string(), "b".to_string()],
                vec!["1".to_string(), "2".to_string()],
            ]
        );
    }

    #[test]
    fn test_case_insensitive_and_multiline() {
        let html = "<TABLE>\n<TR>\n<TD>x</TD>\n<TD>y</TD>\n</TR>\n</TABLE>";
        let rows = extract_html_table(html).unwrap();
        assert_eq!(rows.rows(), &[vec!["x".to_string(), "y".to_string()]]);
    }

    #[test]
    fn test_nested_tags_stripped_and_entities_decoded() {
        let html = "<table><tr><td><b>bold</b></td><td>a &amp; b</td></tr></table>";
        let rows = extract_html_table(html).unwrap();
        assert_eq!(rows.rows(), &[vec!["bold".to_string(), "a & b".to_string()]]);
    }

    #[test]
    fn test_cell_less_rows_dropped() {
        let html = "<table><tr></tr><tr><td>only</td></tr></table>";
        let rows = extract_html_table(html).unwrap();
        assert_eq!(rows.row_count(), 1);
    }

    #[test]
    fn test_no_table_tag_is_none() {
        assert_eq!(extract_html_table("<tr><td>x</td></tr>"), None);
        assert_eq!(extract_html_table("<p>hello</p>"), None);
    }
}
