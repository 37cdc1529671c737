//! Per-metric grid result folders.
//!
//! Each grid output folder holds a `grids_info.json` index plus one
//! `.res` file per sensor grid, one value per line.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{VizError, VizResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridInfo {
    pub identifier: String,
    #[serde(default)]
    pub full_id: Option<String>,
    pub count: usize,
}

impl GridInfo {
    pub fn result_stem(&self) -> &str {
        self.full_id.as_deref().unwrap_or(&self.identifier)
    }
}

/// Results of one metric across all sensor grids, in index order.
#[derive(Debug, Clone)]
pub struct GridResults {
    pub metric: String,
    pub grids: Vec<(GridInfo, Vec<f64>)>,
}

impl GridResults {
    /// Values of every grid concatenated in index order.
    pub fn combined_values(&self) -> Vec<f64> {
        self.grids
            .iter()
            .flat_map(|(_, values)| values.iter().copied())
            .collect()
    }

    pub fn grid_values(&self, identifier: &str) -> Option<&[f64]> {
        self.grids
            .iter()
            .find(|(info, _)| info.identifier == identifier)
            .map(|(_, values)| values.as_slice())
    }
}

/// Load one metric's result folder.
pub fn load_grid_results(dir: &Path, metric: &str) -> VizResult<GridResults> {
    let info_path = dir.join("grids_info.json");
    let info_content = fs::read_to_string(&info_path).map_err(|err| VizError::MissingGridData {
        metric: metric.to_string(),
        message: format!("cannot read {}: {err}", info_path.display()),
    })?;
    let infos: Vec<GridInfo> = serde_json::from_str(&info_content)?;

    let mut grids = Vec::with_capacity(infos.len());
    for info in infos {
        let values_path = dir.join(format!("{}.res", info.result_stem()));
        let values = read_values(&values_path).map_err(|err| VizError::MissingGridData {
            metric: metric.to_string(),
            message: format!("cannot read {}: {err}", values_path.display()),
        })?;
        if values.len() != info.count {
            return Err(VizError::ValueCountMismatch {
                metric: metric.to_string(),
                grid: info.identifier.clone(),
                expected: info.count,
                actual: values.len(),
            });
        }
        grids.push((info, values));
    }

    Ok(GridResults {
        metric: metric.to_string(),
        grids,
    })
}

fn read_values(path: &Path) -> Result<Vec<f64>, String> {
    let content = fs::read_to_string(path).map_err(|err| err.to_string())?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim()
                .parse::<f64>()
                .map_err(|err| format!("bad value {line:?}: {err}"))
        })
        .collect()
}
