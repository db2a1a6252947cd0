//! Markdown table rendering.

use super::TableRows;

const MIN_COLUMN_WIDTH: usize = 3;

/// Render rows as a Markdown table. The first row is the header and fixes the
/// column count; shorter data rows are padded with empty cells and longer
/// rows are truncated. Column width is at least 3 so the separator dashes
/// stay valid Markdown.
pub fn render_markdown(rows: &TableRows) -> Option<String> {
    let header = rows.0.first()?;
    if header.is_empty() {
        return None;
    }
    let columns = header.len();

    let mut widths: Vec<usize> = header
        .iter()
        .map(|cell| cell.chars().count().max(MIN_COLUMN_WIDTH))
        .collect();
    for row in rows.0.iter().skip(1) {
        for (i, cell) in row.iter().take(columns).enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render_row = |row: &[String]| {
        let mut line = String::from("|");
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            line.push(' ');
            line.push_str(cell);
            for _ in cell.chars().count()..*width {
                line.push(' ');
            }
            line.push_str(" |");
        }
        line
    };

    let mut separator = String::from("|");
    for width in &widths {
        separator.push(' ');
        separator.push_str(&"-".repeat(*width));
        separator.push_str(" |");
    }

    let mut lines = Vec::with_capacity(rows.0.len() + 1);
    lines.push(render_row(header));
    lines.push(separator);
    for row in rows.0.iter().skip(1) {
        lines.push(render_row(row));
    }
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> TableRows {
        TableRows::new(
            data.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_header_separator_data() {
        let out = render_markdown(&rows(&[&["a", "b"], &["1", "2"]])).unwrap();
        assert_eq!(out, "| a   | b   |\n| --- | --- |\n| 1   | 2   |");
    }

    #[test]
    fn test_width_tracks_longest_cell() {
        let out = render_markdown(&rows(&[&["name", "n"], &["longer-value", "2"]])).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "| name         | n   |");
        assert_eq!(lines[1], "| ------------ | --- |");
        assert_eq!(lines[2], "| longer-value | 2   |");
    }

    #[test]
    fn test_short_rows_padded_long_rows_truncated() {
        let out = render_markdown(&rows(&[&["a", "b"], &["1"], &["1", "2", "3"]])).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "| 1   |     |");
        assert_eq!(lines[3], "| 1   | 2   |");
    }

    #[test]
    fn test_no_rows_renders_nothing() {
        assert_eq!(render_markdown(&TableRows::default()), None);
    }
}
