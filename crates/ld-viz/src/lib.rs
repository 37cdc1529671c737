//! ld-viz: building-model parsing and visualization-set assembly.
//!
//! Turns a model document plus per-metric grid results into one
//! packaged scene file for the rendering frontend.

pub mod grids;
pub mod metadata;
pub mod model;
pub mod scene;
pub mod vtkjs;

pub use grids::{load_grid_results, GridInfo, GridResults};
pub use metadata::{daylight_metrics, LegendParameters, MetricDataType, VisualizationMetaData};
pub use model::Model;
pub use scene::{build_visualization_set, AnalysisGeometry, VisualizationData, VisualizationSet};
pub use vtkjs::{read_vtkjs, write_vtkjs};

pub type VizResult<T> = Result<T, VizError>;

#[derive(thiserror::Error, Debug)]
pub enum VizError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid model document: {message}")]
    InvalidModel { message: String },

    #[error("Missing grid data for '{metric}': {message}")]
    MissingGridData { metric: String, message: String },

    #[error("Grid '{grid}' of '{metric}' has {actual} values, expected {expected}")]
    ValueCountMismatch {
        metric: String,
        grid: String,
        expected: usize,
        actual: usize,
    },

    #[error("Active metric '{metric}' is not among the loaded data layers")]
    UnknownActiveMetric { metric: String },

    #[error("Failed to package scene: {message}")]
    Package { message: String },
}
