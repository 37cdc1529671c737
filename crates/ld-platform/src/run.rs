//! Capability contract for a resolved run.

use ld_core::RunLocator;
use serde_json::Value;

use crate::types::{Recipe, RunDetails, RunStatus};
use crate::PlatformResult;

/// Read access to one simulation run.
///
/// Downstream stages depend on this trait rather than the HTTP client,
/// so tests can drive the pipeline with in-memory runs.
pub trait RunHandle {
    fn details(&self) -> &RunDetails;

    /// Download one named packaged output as zip-archive bytes.
    fn download_output(&self, name: &str) -> PlatformResult<Vec<u8>>;

    /// Fetch the building-model document the run was executed against.
    fn model_document(&self) -> PlatformResult<Value>;

    fn locator(&self) -> &RunLocator {
        &self.details().locator
    }

    fn status(&self) -> RunStatus {
        self.details().status
    }

    fn recipe(&self) -> &Recipe {
        &self.details().recipe
    }
}
