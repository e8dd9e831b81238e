//! TSV loader for Anki deck exports

use crate::error::{Error, Result};
use crate::table::{Column, Row, Table};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Parse a tab-separated export file into a Table
pub fn parse_tsv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    read_table(BufReader::new(file), path.to_path_buf())
}

/// Parse TSV from a string (useful for testing)
pub fn parse_tsv_str(content: &str, source_name: &str) -> Result<Table> {
    read_table(content.as_bytes(), PathBuf::from(source_name))
}

fn read_table<R: Read>(reader: R, path: PathBuf) -> Result<Table> {
    let mut tsv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true) // Anki leaves trailing empty fields off some rows
        .from_reader(reader);

    let headers = tsv_reader.headers().map_err(|e| Error::Csv {
        path: path.clone(),
        source: e,
    })?;

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.to_string(), i))
        .collect();

    let mut rows = Vec::new();
    for (row_idx, result) in tsv_reader.records().enumerate() {
        let record = result.map_err(|e| Error::Csv {
            path: path.clone(),
            source: e,
        })?;

        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();

        if cells.len() < columns.len() {
            cells.resize(columns.len(), String::new());
        } else if cells.len() > columns.len() {
            warn!(
                row = row_idx + 1,
                path = %path.display(),
                "row has more cells than columns, truncating"
            );
            cells.truncate(columns.len());
        }

        rows.push(Row::new(cells));
    }

    debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = rows.len(),
        "loaded export"
    );

    Ok(Table {
        columns,
        rows,
        source_path: path,
    })
}
