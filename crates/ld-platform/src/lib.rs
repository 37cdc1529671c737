//! ld-platform: access to simulation runs hosted on Pollination.
//!
//! The rest of the pipeline talks to a run through the [`RunHandle`]
//! capability trait; the HTTP client here is one implementation of it.

pub mod client;
pub mod run;
pub mod types;

pub use client::{PollinationClient, PlatformRun};
pub use run::RunHandle;
pub use types::{Recipe, RunDetails, RunStatus};

pub type PlatformResult<T> = Result<T, PlatformError>;

#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Platform API returned {status} for {url}")]
    Api { status: u16, url: String },

    #[error("Run has no '{name}' input artifact")]
    MissingInput { name: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] ld_core::CoreError),
}
