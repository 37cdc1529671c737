//! Static visualization metadata for the five grid metrics.
//!
//! The same five entries apply to every run; nothing here is derived
//! from run data. Categorical metrics get their label dictionary at
//! construction time, continuous metrics never carry one.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const METADATA_FILE: &str = "vis_metadata.json";

/// Default color ramp for every legend, low to high.
pub const COLOR_RAMP: [[u8; 3]; 10] = [
    [75, 107, 169],
    [115, 147, 202],
    [170, 200, 247],
    [193, 213, 208],
    [245, 239, 103],
    [252, 230, 74],
    [239, 156, 21],
    [234, 123, 0],
    [234, 74, 0],
    [234, 38, 0],
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricDataType {
    pub name: String,
    pub base_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegendParameters {
    pub min: f64,
    pub max: f64,
    pub colors: Vec<[u8; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal_dictionary: Option<BTreeMap<u32, String>>,
}

impl LegendParameters {
    pub fn continuous(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            colors: COLOR_RAMP.to_vec(),
            ordinal_dictionary: None,
        }
    }

    pub fn categorical(min: f64, max: f64, labels: &[(u32, &str)]) -> Self {
        let dictionary = labels
            .iter()
            .map(|(value, label)| (*value, label.to_string()))
            .collect();
        Self {
            min,
            max,
            colors: COLOR_RAMP.to_vec(),
            ordinal_dictionary: Some(dictionary),
        }
    }

    pub fn is_categorical(&self) -> bool {
        self.ordinal_dictionary.is_some()
    }

    /// Display label for a value under a categorical legend.
    pub fn label_for(&self, value: f64) -> Option<&str> {
        let dictionary = self.ordinal_dictionary.as_ref()?;
        if value < 0.0 || value.fract() != 0.0 {
            return None;
        }
        dictionary.get(&(value as u32)).map(String::as_str)
    }
}

/// Per-metric metadata as written to `vis_metadata.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisualizationMetaData {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub data_type: MetricDataType,
    pub unit: String,
    pub legend_parameters: LegendParameters,
}

impl VisualizationMetaData {
    pub const TYPE: &'static str = "VisualizationMetaData";

    fn illuminance(name: &str) -> Self {
        Self {
            type_tag: Self::TYPE.to_string(),
            data_type: MetricDataType {
                name: name.to_string(),
                base_type: "Illuminance".to_string(),
            },
            unit: "lux".to_string(),
            legend_parameters: LegendParameters::continuous(300.0, 3000.0),
        }
    }

    fn pass_fail(name: &str) -> Self {
        Self {
            type_tag: Self::TYPE.to_string(),
            data_type: MetricDataType {
                name: name.to_string(),
                base_type: "GenericType".to_string(),
            },
            unit: String::new(),
            legend_parameters: LegendParameters::categorical(
                0.0,
                1.0,
                &[(0, "Fail"), (1, "Pass")],
            ),
        }
    }
}

/// Metadata for every grid metric, keyed by output folder name.
pub fn daylight_metrics() -> IndexMap<String, VisualizationMetaData> {
    IndexMap::from([
        (
            "illuminance-9am".to_string(),
            VisualizationMetaData::illuminance("Illuminance 9am"),
        ),
        (
            "illuminance-3pm".to_string(),
            VisualizationMetaData::illuminance("Illuminance 3pm"),
        ),
        (
            "pass-fail-9am".to_string(),
            VisualizationMetaData::pass_fail("Pass/Fail 9am"),
        ),
        (
            "pass-fail-3pm".to_string(),
            VisualizationMetaData::pass_fail("Pass/Fail 3pm"),
        ),
        (
            "pass-fail-combined".to_string(),
            VisualizationMetaData::pass_fail("Pass/Fail"),
        ),
    ])
}
