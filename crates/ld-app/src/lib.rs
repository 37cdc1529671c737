//! Shared application service layer.
//!
//! Composes the pipeline stages — validation gate, artifact fetch,
//! visualization and report assembly — behind one interface for
//! frontends.

pub mod error;
pub mod pipeline;
pub mod sample;
pub mod validate;

pub use error::{AppError, AppResult};
pub use pipeline::{load_run, RunArtifacts, ACTIVE_METRIC};
pub use sample::{load_sample, SampleArtifacts};
pub use validate::{validate_run, EXPECTED_RECIPE, MIN_RECIPE_VERSION};
