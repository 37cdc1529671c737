//! Fetch & unpack stage: populate a run's bundle from the platform.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use ld_platform::RunHandle;
use tracing::{debug, info};
use zip::ZipArchive;

use crate::bundle::{ArtifactBundle, RUN_OUTPUTS};
use crate::cache::ArtifactCache;
use crate::{ArtifactsError, ArtifactsResult};

/// Download and extract every missing output of the run into its cache
/// bundle.
///
/// Already-populated output folders are skipped, so a second call for
/// the same run id performs no downloads. The first failure aborts the
/// whole fetch; the failing output's partial folder is removed so a
/// retry fetches it again.
pub fn fetch_bundle(
    run: &dyn RunHandle,
    cache: &ArtifactCache,
) -> ArtifactsResult<ArtifactBundle> {
    let bundle = cache.bundle(&run.locator().run_id);

    for output in RUN_OUTPUTS {
        if bundle.is_output_populated(output) {
            debug!(run_id = bundle.run_id(), output, "output cached, skipping");
            continue;
        }
        fetch_output(run, &bundle, output)?;
    }

    Ok(bundle)
}

fn fetch_output(
    run: &dyn RunHandle,
    bundle: &ArtifactBundle,
    output: &str,
) -> ArtifactsResult<()> {
    info!(run_id = bundle.run_id(), output, "downloading output");

    let archive = run
        .download_output(output)
        .map_err(|source| ArtifactsError::Download {
            output: output.to_string(),
            source,
        })?;

    let dir = bundle.output_dir(output);
    if let Err(err) = extract_archive(&archive, &dir, output) {
        // Leave no partial folder behind: the populated check must only
        // ever see fully extracted outputs.
        let _ = fs::remove_dir_all(&dir);
        return Err(err);
    }
    Ok(())
}

fn extract_archive(bytes: &[u8], dir: &Path, output: &str) -> ArtifactsResult<()> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|err| ArtifactsError::Extract {
            output: output.to_string(),
            message: err.to_string(),
        })?;
    fs::create_dir_all(dir)?;
    archive.extract(dir).map_err(|err| ArtifactsError::Extract {
        output: output.to_string(),
        message: err.to_string(),
    })
}
