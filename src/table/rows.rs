//! Parsed tabular data.

/// Ordered rows of cell strings. Rows may have unequal lengths as a parsing
/// artifact; renderers normalize to the first row's column count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRows(pub Vec<Vec<String>>);

impl TableRows {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self(rows)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.0.len()
    }

    /// Column count fixed by the first row; zero when there are no rows.
    pub fn column_count(&self) -> usize {
        self.0.first().map(Vec::len).unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.0
    }
}

impl From<Vec<Vec<String>>> for TableRows {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_from_first_row() {
        let rows = TableRows::new(vec![
            vec!["a".into(), "b".into()],
            vec!["1".into(), "2".into(), "3".into()],
        ]);
        assert_eq!(rows.column_count(), 2);
        assert_eq!(rows.row_count(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(TableRows::default().is_empty());
        assert_eq!(TableRows::default().column_count(), 0);
    }
}
