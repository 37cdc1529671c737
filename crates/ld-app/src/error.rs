//! Error taxonomy for the pipeline.
//!
//! Four user-facing kinds: validation failures (pick another run),
//! fetch failures (re-invoke the action), assembly failures (the run is
//! incompatible), and missing sample data (demo path only). All of
//! them surface synchronously to the caller; nothing is swallowed.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Artifact fetch failed: {0}")]
    Fetch(String),

    #[error("Visualization assembly failed: {0}")]
    Assembly(String),

    #[error("Sample data is missing: {}", path.display())]
    MissingSampleData { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for service-layer operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types

impl From<ld_platform::PlatformError> for AppError {
    fn from(err: ld_platform::PlatformError) -> Self {
        AppError::Fetch(err.to_string())
    }
}

impl From<ld_artifacts::ArtifactsError> for AppError {
    fn from(err: ld_artifacts::ArtifactsError) -> Self {
        AppError::Fetch(err.to_string())
    }
}

impl From<ld_viz::VizError> for AppError {
    fn from(err: ld_viz::VizError) -> Self {
        AppError::Assembly(err.to_string())
    }
}

impl From<ld_report::ReportError> for AppError {
    fn from(err: ld_report::ReportError) -> Self {
        AppError::Assembly(err.to_string())
    }
}
