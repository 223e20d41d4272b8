//! BRICS data-element import template.

use serde::{Deserialize, Serialize};

/// Fixed-schema table: ordered header plus rows aligned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Template {
    /// Create an empty template with the given header.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_row_aligns_to_header() {
        let mut template = Template::new(vec!["a".to_string(), "b".to_string()]);
        template.push_row(vec!["1".to_string()]);
        template.push_row(vec!["1".to_string(), "2".to_string(), "3".to_string()]);

        assert_eq!(template.len(), 2);
        assert_eq!(template.rows()[0], vec!["1".to_string(), String::new()]);
        assert_eq!(template.rows()[1], vec!["1".to_string(), "2".to_string()]);
        assert_eq!(template.column_index("b"), Some(1));
        assert!(!template.has_column("c"));
    }
}
