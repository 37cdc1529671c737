//! Visualization-set assembly.
//!
//! Combines the building model's geometry with the per-metric grid
//! results into one scene: context geometry for rooms and apertures,
//! analysis geometry carrying the sensor-grid overlays.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grids::{load_grid_results, GridResults};
use crate::metadata::{LegendParameters, MetricDataType, VisualizationMetaData};
use crate::model::{Mesh3D, Model, SensorGrid};
use crate::{VizError, VizResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationSet {
    pub identifier: String,
    pub context_geometry: Vec<ContextFace>,
    pub analysis_geometry: AnalysisGeometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceKind {
    Face,
    Aperture,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextFace {
    pub identifier: String,
    pub kind: FaceKind,
    pub boundary: Vec<[f64; 3]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisGeometry {
    pub identifier: String,
    pub grids: Vec<GridGeometry>,
    pub data_sets: Vec<VisualizationData>,
    /// Index into `data_sets` of the layer shown by default.
    pub active_data: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridGeometry {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<Mesh3D>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<[f64; 3]>,
}

/// One named data layer over the analysis geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationData {
    pub metric: String,
    pub data_type: MetricDataType,
    pub unit: String,
    pub legend_parameters: LegendParameters,
    pub min_value: f64,
    pub max_value: f64,
    pub values: Vec<f64>,
}

impl VisualizationData {
    fn new(metric: &str, metadata: &VisualizationMetaData, values: Vec<f64>) -> Self {
        let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            metric: metric.to_string(),
            data_type: metadata.data_type.clone(),
            unit: metadata.unit.clone(),
            legend_parameters: metadata.legend_parameters.clone(),
            min_value,
            max_value,
            values,
        }
    }
}

/// Build the scene for a model whose grid results live under
/// `grid_data_dir/<metric>/`.
///
/// `metrics` decides both which layers are loaded and their order;
/// `active_metric` names the layer shown by default.
pub fn build_visualization_set<'a, M>(
    model: &Model,
    grid_data_dir: &Path,
    metrics: M,
    active_metric: &str,
) -> VizResult<VisualizationSet>
where
    M: IntoIterator<Item = (&'a String, &'a VisualizationMetaData)>,
{
    let grids: Vec<GridGeometry> = model.sensor_grids().iter().map(grid_geometry).collect();

    let mut data_sets = Vec::new();
    for (metric, metadata) in metrics {
        let results = load_grid_results(&grid_data_dir.join(metric), metric)?;
        let values = align_values(model, &results)?;
        debug!(metric = metric.as_str(), values = values.len(), "loaded data layer");
        data_sets.push(VisualizationData::new(metric, metadata, values));
    }

    let active_data = data_sets
        .iter()
        .position(|data| data.metric == active_metric)
        .ok_or_else(|| VizError::UnknownActiveMetric {
            metric: active_metric.to_string(),
        })?;

    Ok(VisualizationSet {
        identifier: model.identifier.clone(),
        context_geometry: context_faces(model),
        analysis_geometry: AnalysisGeometry {
            identifier: "sensor-grids".to_string(),
            grids,
            data_sets,
            active_data,
        },
    })
}

/// Concatenate one metric's values in model grid order, checking that
/// every model grid is covered with the right sensor count.
fn align_values(model: &Model, results: &GridResults) -> VizResult<Vec<f64>> {
    let mut values = Vec::new();
    for grid in model.sensor_grids() {
        let grid_values = results
            .grids
            .iter()
            .find(|(info, _)| {
                info.result_stem() == grid.full_id() || info.identifier == grid.identifier
            })
            .map(|(_, values)| values)
            .ok_or_else(|| VizError::MissingGridData {
                metric: results.metric.clone(),
                message: format!("no results for sensor grid '{}'", grid.identifier),
            })?;
        if grid_values.len() != grid.sensor_count() {
            return Err(VizError::ValueCountMismatch {
                metric: results.metric.clone(),
                grid: grid.identifier.clone(),
                expected: grid.sensor_count(),
                actual: grid_values.len(),
            });
        }
        values.extend_from_slice(grid_values);
    }
    Ok(values)
}

fn grid_geometry(grid: &SensorGrid) -> GridGeometry {
    GridGeometry {
        identifier: grid.identifier.clone(),
        mesh: grid.mesh.clone(),
        points: if grid.mesh.is_none() {
            grid.sensors.iter().map(|sensor| sensor.pos).collect()
        } else {
            Vec::new()
        },
    }
}

fn context_faces(model: &Model) -> Vec<ContextFace> {
    let mut faces = Vec::new();
    for room in &model.rooms {
        for face in &room.faces {
            faces.push(ContextFace {
                identifier: face.identifier.clone(),
                kind: FaceKind::Face,
                boundary: face.geometry.boundary.clone(),
            });
            for aperture in &face.apertures {
                faces.push(ContextFace {
                    identifier: aperture.identifier.clone(),
                    kind: FaceKind::Aperture,
                    boundary: aperture.geometry.boundary.clone(),
                });
            }
        }
    }
    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::daylight_metrics;

    #[test]
    fn data_layer_records_value_range() {
        let metrics = daylight_metrics();
        let data = VisualizationData::new(
            "illuminance-9am",
            &metrics["illuminance-9am"],
            vec![120.0, 450.0, 3200.0],
        );
        assert_eq!(data.min_value, 120.0);
        assert_eq!(data.max_value, 3200.0);
        assert_eq!(data.unit, "lux");
    }
}
