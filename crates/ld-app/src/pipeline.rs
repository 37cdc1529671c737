//! The run-loading pipeline: gate, fetch, assemble.

use std::fs;
use std::path::PathBuf;

use ld_artifacts::{fetch_bundle, ArtifactBundle, ArtifactCache, GRID_OUTPUTS};
use ld_platform::RunHandle;
use ld_report::{load_credit_summary, CreditSummary, SpaceSummary};
use ld_viz::metadata::METADATA_FILE;
use ld_viz::{build_visualization_set, daylight_metrics, write_vtkjs, Model};
use tracing::info;

use crate::error::AppResult;
use crate::validate::validate_run;

/// Data layer shown by default in the packaged scene.
pub const ACTIVE_METRIC: &str = "pass-fail-combined";

/// Everything a frontend needs after loading one run.
#[derive(Debug)]
pub struct RunArtifacts {
    pub bundle: ArtifactBundle,
    /// The packaged scene file, regenerated on every load.
    pub vis_set_path: PathBuf,
    pub credit_summary: CreditSummary,
    /// Lazy handle; the reporting layer reads it on demand.
    pub space_summary: SpaceSummary,
}

/// Run the full pipeline for one selected run.
///
/// Validation happens before any network access. The fetch stage is a
/// cache hit for bundles already on disk; the visualization artifact is
/// rebuilt from the bundle on every call.
pub fn load_run(run: &dyn RunHandle, cache: &ArtifactCache) -> AppResult<RunArtifacts> {
    validate_run(run.details())?;

    let run_id = run.locator().run_id.as_str();
    info!(run_id, "fetching run outputs");
    let bundle = fetch_bundle(run, cache)?;

    info!(run_id, "assembling visualization");
    assemble(run, bundle)
}

fn assemble(run: &dyn RunHandle, bundle: ArtifactBundle) -> AppResult<RunArtifacts> {
    let model = Model::from_document(run.model_document()?)?;

    // Write each metric's metadata next to its grid results so the
    // bundle folder is self-describing for the scene builder.
    let metrics = daylight_metrics();
    for metric in GRID_OUTPUTS {
        let metadata = &metrics[metric];
        let content =
            serde_json::to_string_pretty(metadata).map_err(ld_viz::VizError::from)?;
        fs::write(bundle.output_dir(metric).join(METADATA_FILE), content)?;
    }

    let set = build_visualization_set(&model, bundle.root(), &metrics, ACTIVE_METRIC)?;
    let vis_set_path = bundle.vis_set_path();
    write_vtkjs(&set, &vis_set_path)?;

    let credit_summary = load_credit_summary(&bundle.credit_summary_path())?;
    let space_summary = SpaceSummary::new(bundle.space_summary_path());

    Ok(RunArtifacts {
        bundle,
        vis_set_path,
        credit_summary,
        space_summary,
    })
}
