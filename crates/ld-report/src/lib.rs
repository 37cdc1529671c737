//! ld-report: credit and space-by-space report payloads plus their
//! tabular rendering and CSV export.

pub mod credit;
pub mod space;
pub mod table;

pub use credit::{
    load_credit_summary, CreditStyle, CreditSummary, DEFAULT_NOTABLE_THRESHOLD,
};
pub use space::{SpaceSummary, SpaceTable, ROUND_COLUMNS};
pub use table::{credit_csv_bytes, credit_rows, humanize_label, two_decimals};

/// Canonical export file names for the two report downloads.
pub const CREDIT_EXPORT_FILE: &str = "summary.csv";
pub const SPACE_EXPORT_FILE: &str = "summary_space.csv";

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid credit summary: {message}")]
    InvalidCreditSummary { message: String },

    #[error("Column '{column}' is numeric but holds {value:?}")]
    NonNumericCell { column: String, value: String },
}
