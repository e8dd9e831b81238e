//! Core table types for representing exported flashcard data

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A table of text cells loaded from a single export file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Column definitions, in display order
    pub columns: Vec<Column>,
    /// Row data, in file order
    pub rows: Vec<Row>,
    /// Source file path
    pub source_path: PathBuf,
}

impl Table {
    /// Create a new empty table
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            source_path,
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find a column by name
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Index of a named column, or `MissingColumn`
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.find_column(name)
            .map(|c| c.index)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// All values of one column, in row order
    pub fn column_values(&self, name: &str) -> Result<Vec<&str>> {
        let index = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|r| r.get(index).unwrap_or_default())
            .collect())
    }

    /// Append a column holding the same value in every row
    pub fn push_constant_column(&mut self, name: &str, value: &str) {
        let index = self.columns.len();
        self.columns.push(Column::new(name.to_string(), index));
        for row in &mut self.rows {
            row.cells.resize(index, String::new());
            row.cells.push(value.to_string());
        }
    }
}

/// A column definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (e.g., "Grammar")
    pub name: String,
    /// Column index (0-based)
    pub index: usize,
}

impl Column {
    /// Create a new column
    pub fn new(name: String, index: usize) -> Self {
        Self { name, index }
    }
}

/// A row of text cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Cell values for each column, verbatim from the source
    pub cells: Vec<String>,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Overwrite a cell value, growing the row if needed
    pub fn set(&mut self, index: usize, value: String) {
        if index >= self.cells.len() {
            self.cells.resize(index + 1, String::new());
        }
        self.cells[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(PathBuf::from("sample.tsv"));
        table.columns = vec![
            Column::new("Grammar".to_string(), 0),
            Column::new("Sentence".to_string(), 1),
        ];
        table.rows = vec![
            Row::new(vec!["A".to_string(), "foo".to_string()]),
            Row::new(vec!["B".to_string(), "bar".to_string()]),
        ];
        table
    }

    #[test]
    fn test_column_lookup() {
        let table = sample();
        assert_eq!(table.column_index("Sentence").unwrap(), 1);
        assert!(table.find_column("Examples").is_none());
        assert!(matches!(
            table.column_index("Examples"),
            Err(Error::MissingColumn(name)) if name == "Examples"
        ));
    }

    #[test]
    fn test_column_values() {
        let table = sample();
        assert_eq!(table.column_values("Grammar").unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_push_constant_column() {
        let mut table = sample();
        table.push_constant_column("Learning Status", "In Progress");

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.columns[2].index, 2);
        for row in &table.rows {
            assert_eq!(row.get(2), Some("In Progress"));
        }
    }

    #[test]
    fn test_row_set_grows() {
        let mut row = Row::new(vec!["a".to_string()]);
        row.set(2, "c".to_string());
        assert_eq!(row.cells, vec!["a", "", "c"]);
    }
}
