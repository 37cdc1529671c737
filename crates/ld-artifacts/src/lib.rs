//! ld-artifacts: on-disk cache and fetch stage for run outputs.

pub mod bundle;
pub mod cache;
pub mod fetch;

pub use bundle::{ArtifactBundle, GRID_OUTPUTS, RUN_OUTPUTS, VIS_SET_FILE};
pub use cache::ArtifactCache;
pub use fetch::fetch_bundle;

pub type ArtifactsResult<T> = Result<T, ArtifactsError>;

#[derive(thiserror::Error, Debug)]
pub enum ArtifactsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to download output '{output}': {source}")]
    Download {
        output: String,
        source: ld_platform::PlatformError,
    },

    #[error("Failed to extract output '{output}': {message}")]
    Extract { output: String, message: String },
}
