//! Bundled demo data, for trying the app without a platform account.

use std::path::PathBuf;

use ld_artifacts::{ArtifactCache, VIS_SET_FILE};
use ld_report::{load_credit_summary, CreditSummary, SpaceSummary};

use crate::error::{AppError, AppResult};

/// Prepared sample-run payload. Unlike a live run, the sample ships a
/// prebuilt visualization artifact; nothing is fetched or assembled.
#[derive(Debug)]
pub struct SampleArtifacts {
    pub vis_set_path: PathBuf,
    pub credit_summary: CreditSummary,
    pub space_summary: SpaceSummary,
}

pub fn load_sample(cache: &ArtifactCache) -> AppResult<SampleArtifacts> {
    let sample_dir = cache.sample_dir();
    let vis_set_path = sample_dir.join(VIS_SET_FILE);
    let credit_path = sample_dir.join("credit-summary").join("credit_summary.json");
    let space_path = sample_dir.join("space-summary").join("space_summary.csv");

    for path in [&vis_set_path, &credit_path, &space_path] {
        if !path.exists() {
            return Err(AppError::MissingSampleData { path: path.clone() });
        }
    }

    let credit_summary = load_credit_summary(&credit_path)?;
    Ok(SampleArtifacts {
        vis_set_path,
        credit_summary,
        space_summary: SpaceSummary::new(space_path),
    })
}
