//! Space-by-space breakdown table.

use std::path::{Path, PathBuf};

use crate::table::two_decimals;
use crate::{ReportError, ReportResult};

/// Columns rendered and exported with two-decimal formatting. All other
/// columns pass through untouched.
pub const ROUND_COLUMNS: [&str; 6] = [
    "Area (m2)",
    "Area (ft2)",
    "Spacing (m)",
    "% Passing 9AM",
    "% Passing 3PM",
    "% Passing Combined",
];

/// Handle on the space-summary CSV. The file is only read when the
/// reporting layer actually renders or exports it.
#[derive(Debug, Clone)]
pub struct SpaceSummary {
    path: PathBuf,
}

impl SpaceSummary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> ReportResult<SpaceTable> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|header| header.to_string())
            .collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }
        Ok(SpaceTable { columns, rows })
    }
}

/// In-memory table, one row per space.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SpaceTable {
    /// Copy of the table with the whitelisted numeric columns rendered
    /// at two decimals. A non-numeric cell in one of those columns is
    /// an error rather than a silent pass-through.
    pub fn formatted(&self) -> ReportResult<SpaceTable> {
        let numeric: Vec<bool> = self
            .columns
            .iter()
            .map(|column| ROUND_COLUMNS.contains(&column.as_str()))
            .collect();

        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut formatted = Vec::with_capacity(row.len());
            for (index, cell) in row.iter().enumerate() {
                if numeric.get(index).copied().unwrap_or(false) {
                    let value: f64 =
                        cell.trim()
                            .parse()
                            .map_err(|_| ReportError::NonNumericCell {
                                column: self.columns[index].clone(),
                                value: cell.clone(),
                            })?;
                    formatted.push(two_decimals(value));
                } else {
                    formatted.push(cell.clone());
                }
            }
            rows.push(formatted);
        }

        Ok(SpaceTable {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// CSV byte stream with the same formatting as the rendered table.
    pub fn to_csv_bytes(&self) -> ReportResult<Vec<u8>> {
        let formatted = self.formatted()?;
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&formatted.columns)?;
        for row in &formatted.rows {
            writer.write_record(row)?;
        }
        writer.into_inner().map_err(|err| {
            ReportError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                err.to_string(),
            ))
        })
    }
}
