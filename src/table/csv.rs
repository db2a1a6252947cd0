//! Minimal comma-delimited CSV rendering and round-trip parsing.
//!
//! Not a dialect-complete CSV implementation: commas only, quoting only when
//! a cell contains a comma, newline or quote.

use super::TableRows;

/// Quote a field iff it contains a comma, newline or quote; internal quotes
/// are doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('\n') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Comma-joined cells, newline-joined rows, no trailing newline.
pub fn render_csv(rows: &TableRows) -> String {
    rows.0
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| escape_field(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single-pass scanner for round-tripping a previously rendered CSV string.
///
/// Tracks quote state; a doubled quote inside a quoted field is a literal
/// quote. The last field/row is flushed at end of input, and a final row
/// consisting of one empty field (the artifact of a trailing newline) is
/// dropped.
pub fn parse_csv(text: &str) -> TableRows {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
    }
    row.push(field);
    rows.push(row);

    if let Some(last) = rows.last() {
        if last.len() == 1 && last[0].is_empty() {
            rows.pop();
        }
    }
    TableRows(rows)
}
