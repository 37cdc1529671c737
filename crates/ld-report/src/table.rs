//! Shared tabular formatting rules.

use crate::credit::CreditSummary;
use crate::ReportResult;

/// `percentage_passing` -> `Percentage Passing`.
pub fn humanize_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

/// Credit summary as display rows: humanized label, two-decimal value.
pub fn credit_rows(summary: &CreditSummary) -> Vec<(String, String)> {
    summary
        .metrics()
        .into_iter()
        .map(|(key, value)| (humanize_label(key), two_decimals(value)))
        .collect()
}

/// Credit summary as a two-column CSV byte stream.
pub fn credit_csv_bytes(summary: &CreditSummary) -> ReportResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["metric", "value"])?;
    for (label, value) in credit_rows(summary) {
        writer.write_record([label, value])?;
    }
    writer.into_inner().map_err(|err| {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string()).into()
    })
}
