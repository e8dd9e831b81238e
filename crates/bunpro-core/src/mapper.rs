//! Column renaming and reordering

use crate::error::{Error, Result};
use crate::schema::{DERIVED_COLUMNS, OUTPUT_COLUMNS, SOURCE_COLUMNS};
use crate::table::{Column, Row, Table};
use tracing::debug;

/// Rename the export's columns to their semantic names and append the
/// derived `Learning Status` and `Examples` columns.
///
/// The export must have exactly as many columns as `SOURCE_COLUMNS`;
/// anything else is a `SchemaMismatch`.
pub fn map_columns(mut table: Table) -> Result<Table> {
    if table.column_count() != SOURCE_COLUMNS.len() {
        return Err(Error::SchemaMismatch {
            path: table.source_path.clone(),
            expected: SOURCE_COLUMNS.len(),
            found: table.column_count(),
        });
    }

    table.columns = SOURCE_COLUMNS
        .iter()
        .map(|&(index, name)| Column::new(name.to_string(), index))
        .collect();

    for (name, value) in DERIVED_COLUMNS {
        table.push_constant_column(name, value);
    }

    debug!(columns = table.column_count(), "mapped columns");
    Ok(table)
}

/// Project a table onto `OUTPUT_COLUMNS`, in that order
pub fn reorder(table: &Table) -> Result<Table> {
    project(table, &OUTPUT_COLUMNS)
}

/// Project a table onto the named columns, in the given order
pub fn project(table: &Table, names: &[&str]) -> Result<Table> {
    let sources: Vec<usize> = names
        .iter()
        .map(|name| table.column_index(name))
        .collect::<Result<_>>()?;

    let columns = names
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.to_string(), i))
        .collect();

    let rows = table
        .rows
        .iter()
        .map(|row| {
            Row::new(
                sources
                    .iter()
                    .map(|&src| row.get(src).unwrap_or_default().to_string())
                    .collect(),
            )
        })
        .collect();

    Ok(Table {
        columns,
        rows,
        source_path: table.source_path.clone(),
    })
}
