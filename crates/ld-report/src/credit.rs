//! Credit-summary payload and display classification.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ReportError, ReportResult};

/// Credit styling threshold: summaries at or above this many points get
/// the notable treatment. Display heuristic only; callers may override.
pub const DEFAULT_NOTABLE_THRESHOLD: f64 = 2.0;

/// LEED scoring output for one run.
///
/// `credits` and `percentage_passing` are required; any further metrics
/// ride along in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditSummary {
    pub credits: f64,
    pub percentage_passing: f64,
    #[serde(flatten)]
    pub extra: IndexMap<String, f64>,
}

impl CreditSummary {
    /// All metrics in display order: the two required keys first, then
    /// the free-form extras as they appeared in the document.
    pub fn metrics(&self) -> Vec<(&str, f64)> {
        let mut metrics = vec![
            ("credits", self.credits),
            ("percentage_passing", self.percentage_passing),
        ];
        metrics.extend(self.extra.iter().map(|(key, value)| (key.as_str(), *value)));
        metrics
    }

    pub fn style(&self, notable_threshold: f64) -> CreditStyle {
        CreditStyle::classify(self.credits, notable_threshold)
    }
}

/// Two-way presentational branch for the credit headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditStyle {
    Notable,
    Baseline,
}

impl CreditStyle {
    pub fn classify(points: f64, notable_threshold: f64) -> Self {
        if points >= notable_threshold {
            CreditStyle::Notable
        } else {
            CreditStyle::Baseline
        }
    }
}

/// Parse and check `credit_summary.json`.
pub fn load_credit_summary(path: &Path) -> ReportResult<CreditSummary> {
    let content = fs::read_to_string(path)?;
    let summary: CreditSummary =
        serde_json::from_str(&content).map_err(|err| ReportError::InvalidCreditSummary {
            message: err.to_string(),
        })?;
    if !(0.0..=100.0).contains(&summary.percentage_passing) {
        return Err(ReportError::InvalidCreditSummary {
            message: format!(
                "percentage_passing must be within 0-100, got {}",
                summary.percentage_passing
            ),
        });
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_threshold_is_inclusive() {
        assert_eq!(
            CreditStyle::classify(2.0, DEFAULT_NOTABLE_THRESHOLD),
            CreditStyle::Notable
        );
        assert_eq!(
            CreditStyle::classify(1.0, DEFAULT_NOTABLE_THRESHOLD),
            CreditStyle::Baseline
        );
        // Configurable: a stricter display bar.
        assert_eq!(CreditStyle::classify(2.0, 3.0), CreditStyle::Baseline);
    }

    #[test]
    fn parses_required_and_extra_metrics_in_order() {
        let json = r#"{
            "credits": 4,
            "percentage_passing": 87.5,
            "floor_area_passing": 812.25,
            "sensor_count": 1400
        }"#;
        let summary: CreditSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.credits, 4.0);
        let keys: Vec<&str> = summary.metrics().iter().map(|(key, _)| *key).collect();
        assert_eq!(
            keys,
            ["credits", "percentage_passing", "floor_area_passing", "sensor_count"]
        );
    }

    #[test]
    fn missing_required_key_is_rejected() {
        let json = r#"{"percentage_passing": 50.0}"#;
        assert!(serde_json::from_str::<CreditSummary>(json).is_err());
    }

    #[test]
    fn non_numeric_metric_is_rejected() {
        let json = r#"{"credits": 1, "percentage_passing": 50.0, "note": "n/a"}"#;
        assert!(serde_json::from_str::<CreditSummary>(json).is_err());
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credit_summary.json");
        std::fs::write(&path, r#"{"credits": 1, "percentage_passing": 140.0}"#).unwrap();
        let err = load_credit_summary(&path).expect_err("should reject");
        assert!(err.to_string().contains("0-100"));
    }
}
