//! The end-to-end export conversion

use crate::cleaner::{clean_table, default_rules};
use crate::config::ConvertOptions;
use crate::error::Result;
use crate::mapper::{map_columns, reorder};
use crate::merger::{dedupe_and_merge, BlankGrammarPolicy};
use crate::parser::parse_tsv;
use crate::table::Table;
use crate::writer::write_csv;
use std::path::{Path, PathBuf};
use tracing::info;

/// What a conversion read and wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Rows in the source export
    pub rows_read: usize,
    /// Rows in the written CSV, one per grammar point
    pub rows_written: usize,
    /// Path of the written CSV
    pub output: PathBuf,
}

/// Map, reorder, clean and merge a loaded export
pub fn transform(table: Table, policy: BlankGrammarPolicy) -> Result<Table> {
    let mapped = map_columns(table)?;
    let mut table = reorder(&mapped)?;
    clean_table(&mut table, default_rules())?;
    dedupe_and_merge(table, policy)
}

/// Convert the export at `input` into a Notion-ready CSV at `output`
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConvertSummary> {
    convert_with(&ConvertOptions::new(
        input.as_ref().to_path_buf(),
        output.as_ref().to_path_buf(),
    ))
}

/// Run a conversion described by `options`
pub fn convert_with(options: &ConvertOptions) -> Result<ConvertSummary> {
    let table = parse_tsv(&options.input)?;
    let rows_read = table.row_count();

    let table = transform(table, options.blank_grammar)?;
    write_csv(&table, &options.output)?;

    let summary = ConvertSummary {
        rows_read,
        rows_written: table.row_count(),
        output: options.output.clone(),
    };

    info!(
        input = %options.input.display(),
        output = %summary.output.display(),
        rows_read = summary.rows_read,
        rows_written = summary.rows_written,
        "converted export"
    );

    Ok(summary)
}
