//! Single-file scene packaging.
//!
//! The packaged artifact is a zip container holding an `index.json`
//! scene document, consumed by the rendering frontend as a raw byte
//! stream.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::info;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::scene::VisualizationSet;
use crate::{VizError, VizResult};

const INDEX_FILE: &str = "index.json";

/// Write the packaged scene file. The content is a pure function of
/// the scene, so rewriting an existing artifact is safe.
pub fn write_vtkjs(set: &VisualizationSet, path: &Path) -> VizResult<()> {
    let document = serde_json::to_vec_pretty(set)?;

    let file = File::create(path)?;
    let mut writer = ZipWriter::new(file);
    writer
        .start_file(INDEX_FILE, FileOptions::default())
        .map_err(package_error)?;
    writer.write_all(&document)?;
    writer.finish().map_err(package_error)?;
    info!(path = %path.display(), "wrote packaged scene");
    Ok(())
}

/// Read a packaged scene back. Used by the demo path and tests; the
/// rendering frontend only ever sees the raw bytes.
pub fn read_vtkjs(path: &Path) -> VizResult<VisualizationSet> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(package_error)?;
    let mut entry = archive.by_name(INDEX_FILE).map_err(package_error)?;
    let mut document = String::new();
    entry.read_to_string(&mut document)?;
    Ok(serde_json::from_str(&document)?)
}

fn package_error(err: zip::result::ZipError) -> VizError {
    VizError::Package {
        message: err.to_string(),
    }
}
