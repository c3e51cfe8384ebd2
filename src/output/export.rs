// src/output/export.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{error, info, instrument};

use crate::error::{ExportError, Result};
use crate::extract::{Constituent, Table};

/// Lets spreadsheet tools detect UTF-8.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// What ended up on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub rows: usize,
    pub bytes: u64,
}

/// Write `table` to `path` as BOM-prefixed CSV with a header line.
///
/// With `include_index` every line, header included, gets a leading
/// zero-based row number column (blank in the header).
///
/// The file is written in place; after a failure it may be missing, partial
/// or untouched.
#[instrument(level = "info", skip(table, path), fields(path = %path.as_ref().display(), rows = table.len()))]
pub fn export_table<P: AsRef<Path>>(
    table: &[Constituent],
    path: P,
    include_index: bool,
) -> std::result::Result<ExportSummary, ExportError> {
    let path = path.as_ref();
    match write_table(table, path, include_index) {
        Ok(summary) => {
            info!(rows = summary.rows, bytes = summary.bytes, "exported");
            Ok(summary)
        }
        Err(e) => {
            match &e {
                ExportError::PermissionDenied { .. } => {
                    error!("unable to access existing file {}", path.display())
                }
                other => error!(error = %other, "export failed"),
            }
            Err(e)
        }
    }
}

fn write_table(
    table: &[Constituent],
    path: &Path,
    include_index: bool,
) -> std::result::Result<ExportSummary, ExportError> {
    // 1) create / truncate and mark as UTF-8
    let file = File::create(path).map_err(|e| ExportError::from_io(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(UTF8_BOM)
        .map_err(|e| ExportError::from_io(path, e))?;

    // 2) header + rows, quoting only where a field needs it
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    let mut header: Vec<&str> = Vec::with_capacity(Constituent::HEADERS.len() + 1);
    if include_index {
        header.push("");
    }
    header.extend(Constituent::HEADERS);
    wtr.write_record(&header)
        .map_err(|e| ExportError::from_csv(path, e))?;

    for (i, row) in table.iter().enumerate() {
        let idx = i.to_string();
        let mut record: Vec<&str> = Vec::with_capacity(header.len());
        if include_index {
            record.push(&idx);
        }
        record.extend(row.fields());
        wtr.write_record(&record)
            .map_err(|e| ExportError::from_csv(path, e))?;
    }

    // 3) flush through to the file before measuring it
    wtr.flush().map_err(|e| ExportError::from_io(path, e))?;
    drop(wtr);

    let bytes = fs::metadata(path)
        .map_err(|e| ExportError::from_io(path, e))?
        .len();
    Ok(ExportSummary {
        rows: table.len(),
        bytes,
    })
}

/// Read a file written by [`export_table`] back into a table.
///
/// Columns are matched by header name, so an index column is ignored.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|e| ExportError::from_io(path, e))?;
    let body = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw[..]);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body);
    let mut table = Vec::new();
    for rec in rdr.deserialize::<Constituent>() {
        table.push(rec.map_err(|e| ExportError::from_csv(path, e))?);
    }
    Ok(table)
}
