use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error for '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("CSV writing error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
}

/// One grid point in both coordinates, with the reference energy at that distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridRecord {
    pub index: usize,
    pub distance: f64,
    pub bond_order: f64,
    pub energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Curve,
    Grid,
}

/// A sample of the reference potential, tagged by whether it belongs to the smooth
/// curve or marks a grid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveRecord {
    pub kind: CurveKind,
    pub distance: f64,
    pub energy: f64,
}

/// Writes `records` as CSV with a header row derived from the record fields.
pub fn write_records<T, W>(records: &[T], writer: W) -> Result<(), TableError>
where
    T: Serialize,
    W: Write,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_records_to_path<T>(records: &[T], path: &Path) -> Result<(), TableError>
where
    T: Serialize,
{
    let file = File::create(path).map_err(|e| TableError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_records(records, file)
}
