//! Newline-delimited JSON import/export for datasets.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SalesError};
use crate::models::{Dataset, SaleRecord};

/// Write one JSON object per line. Creates or truncates `path`.
pub fn write_ndjson<P, T>(path: P, records: &[T]) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = records.len(), "wrote ndjson");
    Ok(())
}

/// Read a dataset written by [`write_ndjson`]. Blank lines are skipped.
///
/// Each row is rebuilt with [`SaleRecord::new`], so `average_price` is
/// re-derived from sales and quantity rather than trusted from the file. A
/// row with zero quantity is rejected with [`SalesError::InvalidArgument`].
/// The result carries no seed, since the file does not record one.
pub fn read_ndjson<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row: SaleRecord = serde_json::from_str(&line)?;
        if row.quantity == 0 {
            return Err(SalesError::InvalidArgument(format!(
                "{} line {}: quantity must be positive",
                path.display(),
                idx + 1
            )));
        }
        records.push(SaleRecord::new(
            row.date,
            row.category,
            row.region,
            row.sales_amount,
            row.quantity,
        ));
    }
    tracing::info!(path = %path.display(), rows = records.len(), "read ndjson");
    Ok(Dataset::from_records(records))
}

/// Pretty-print any serializable value (a summary, chart series) to `path`.
pub fn write_json<P, T>(path: P, value: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "wrote json");
    Ok(())
}
