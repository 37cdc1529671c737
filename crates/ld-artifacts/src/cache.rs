//! Cache directory layout.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bundle::ArtifactBundle;
use crate::ArtifactsResult;

/// Root of the artifact cache.
///
/// Layout: `<root>/data/<run-id>/` holds one bundle per run id;
/// `<root>/sample/` holds the bundled demo data with the same inner
/// layout.
#[derive(Debug, Clone)]
pub struct ArtifactCache {
    root: PathBuf,
}

impl ArtifactCache {
    pub fn new(root: impl Into<PathBuf>) -> ArtifactsResult<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root)?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn sample_dir(&self) -> PathBuf {
        self.root.join("sample")
    }

    /// The bundle for a run id. Does not touch the filesystem; folders
    /// appear as the fetch stage populates them.
    pub fn bundle(&self, run_id: &str) -> ArtifactBundle {
        ArtifactBundle::new(run_id, self.data_dir().join(run_id))
    }
}
