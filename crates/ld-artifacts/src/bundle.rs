//! The fixed set of run outputs and their on-disk layout.

use std::fs;
use std::path::{Path, PathBuf};

/// Every packaged output the recipe produces, in fetch order.
pub const RUN_OUTPUTS: [&str; 7] = [
    "illuminance-9am",
    "illuminance-3pm",
    "pass-fail-9am",
    "pass-fail-3pm",
    "pass-fail-combined",
    "credit-summary",
    "space-summary",
];

/// The subset of outputs carrying per-sensor grid results.
pub const GRID_OUTPUTS: [&str; 5] = [
    "illuminance-9am",
    "illuminance-3pm",
    "pass-fail-9am",
    "pass-fail-3pm",
    "pass-fail-combined",
];

/// File name of the packaged visualization artifact inside a bundle.
pub const VIS_SET_FILE: &str = "vis_set.vtkjs";

/// One run's artifact folder tree.
///
/// Folders are written once and never mutated afterwards; a populated
/// folder is always safe to read.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    run_id: String,
    root: PathBuf,
}

impl ArtifactBundle {
    pub fn new(run_id: impl Into<String>, root: PathBuf) -> Self {
        Self {
            run_id: run_id.into(),
            root,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn credit_summary_path(&self) -> PathBuf {
        self.root.join("credit-summary").join("credit_summary.json")
    }

    pub fn space_summary_path(&self) -> PathBuf {
        self.root.join("space-summary").join("space_summary.csv")
    }

    pub fn vis_set_path(&self) -> PathBuf {
        self.root.join(VIS_SET_FILE)
    }

    /// An output counts as cached once its folder exists and holds at
    /// least one entry.
    pub fn is_output_populated(&self, name: &str) -> bool {
        let dir = self.output_dir(name);
        match fs::read_dir(&dir) {
            Ok(mut entries) => entries.next().is_some(),
            Err(_) => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        RUN_OUTPUTS
            .iter()
            .all(|output| self.is_output_populated(output))
    }
}
