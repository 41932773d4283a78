//! Table types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A table block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Identifier, unique and increasing within one parse
    pub id: u32,

    /// Table caption, from the `name` attribute
    pub name: Option<String>,

    /// Remaining `key:value` attributes of the opening line
    pub attributes: BTreeMap<String, String>,

    /// Rows of cells, after span merging
    pub rows: Vec<Vec<TableCell>>,
}

impl Table {
    /// Create a new empty table.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: None,
            attributes: BTreeMap::new(),
            rows: Vec::new(),
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<TableCell>) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Check if the table has merged cells.
    pub fn has_merged_cells(&self) -> bool {
        self.rows.iter().flatten().any(TableCell::is_merged)
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content, with presentational markup applied
    pub content: String,

    /// Horizontal alignment
    pub alignment: Alignment,

    /// Number of columns this cell spans
    pub colspan: u32,

    /// Number of rows this cell spans
    pub rowspan: u32,
}

impl TableCell {
    /// Create a centered single cell.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            alignment: Alignment::Center,
            colspan: 1,
            rowspan: 1,
        }
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.rowspan > 1 || self.colspan > 1
    }
}

/// Horizontal alignment of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    Left,
    /// Center alignment (default)
    #[default]
    Center,
    /// Right alignment
    Right,
}

impl Alignment {
    /// CSS `text-align` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new(1);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.cell_count(), 0);
    }

    #[test]
    fn test_merged_cells() {
        let mut table = Table::new(1);
        let mut merged = TableCell::new("Merged");
        merged.colspan = 2;
        table.add_row(vec![merged]);
        table.add_row(vec![TableCell::new("a"), TableCell::new("b")]);

        assert!(table.has_merged_cells());
        assert_eq!(table.cell_count(), 3);
    }

    #[test]
    fn test_cell_defaults() {
        let cell = TableCell::new("x").align(Alignment::Right);
        assert_eq!(cell.alignment.as_css(), "right");
        assert!(!cell.is_merged());
    }
}
