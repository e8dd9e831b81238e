//! CSV export of a finished table

use crate::error::{Error, Result};
use crate::table::Table;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `table` as comma-separated text to `path`, header first, no index
pub fn write_csv<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    write_csv_to(table, BufWriter::new(file), path)
}

/// Write `table` as comma-separated text to any writer
///
/// Fields containing commas, quotes or newlines are quoted; records end in `\n`.
/// `dest` names the destination in errors; I/O failures are `FileWrite`.
pub fn write_csv_to<W: Write>(table: &Table, out: W, dest: &Path) -> Result<()> {
    write_records(table, out).map_err(|e| write_error(e, dest))
}

fn write_records<W: Write>(table: &Table, out: W) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(table.columns.iter().map(|c| c.name.as_str()))?;
    for row in &table.rows {
        writer.write_record(&row.cells)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_error(err: csv::Error, dest: &Path) -> Error {
    let path = dest.to_path_buf();
    if !err.is_io_error() {
        return Error::Csv { path, source: err };
    }

    match err.into_kind() {
        csv::ErrorKind::Io(source) => Error::FileWrite { path, source },
        kind => Error::FileWrite {
            path,
            source: std::io::Error::other(format!("{kind:?}")),
        },
    }
}
