//! CSV writer

use crate::error::{Error, Result};
use crate::pagination::Record;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Compute the union of keys across all records, in first-seen order
///
/// First-seen order keeps the output reproducible for a given record
/// sequence; the API does not promise any field order of its own.
pub fn column_set(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Output filename for a run started at `now`:
/// `twitter_dms_<YYYYMMDD>_<HHMMSS>.csv`
pub fn timestamped_filename(now: DateTime<Local>) -> String {
    format!("twitter_dms_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Writes heterogeneous records as one flat CSV
#[derive(Debug, Clone, Default)]
pub struct CsvWriter;

impl CsvWriter {
    /// Create a writer
    pub fn new() -> Self {
        Self
    }

    /// Write all records to `path`, returning the number of rows written
    ///
    /// An empty record set writes nothing (no file is created) and returns
    /// `Ok(0)`. Otherwise the destination is created or truncated, a header
    /// row is emitted, then one row per record with blanks for absent
    /// columns.
    pub fn write(&self, records: &[Record], path: impl AsRef<Path>) -> Result<usize> {
        if records.is_empty() {
            info!("No records to save");
            return Ok(0);
        }

        let columns = column_set(records);
        let file = File::create(path.as_ref()).map_err(|e| {
            Error::output(format!(
                "Failed to create {}: {e}",
                path.as_ref().display()
            ))
        })?;
        let mut out = BufWriter::new(file);

        write_row(&mut out, columns.iter().map(String::as_str))?;
        for record in records {
            let fields: Vec<String> = columns
                .iter()
                .map(|column| render_value(record.get(column)))
                .collect();
            write_row(&mut out, fields.iter().map(String::as_str))?;
        }
        out.flush()?;

        info!(
            "Wrote {} rows to {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(records.len())
    }
}

/// Write one CSV row with RFC 4180 quoting
fn write_row<'a, W: Write>(out: &mut W, fields: impl Iterator<Item = &'a str>) -> Result<()> {
    let escaped: Vec<String> = fields.map(escape_field).collect();
    writeln!(out, "{}", escaped.join(","))?;
    Ok(())
}

/// Quote a field when it contains a delimiter, quote, or line break
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render a record value as a CSV field
///
/// Absent columns and nulls render blank; scalars render naturally;
/// anything structured falls back to compact JSON.
fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}
