//! End-to-end pipeline scenarios over an in-memory run and a temp cache.

use std::cell::RefCell;
use std::io::{Cursor, Write};

use ld_app::{load_run, AppError};
use ld_artifacts::ArtifactCache;
use ld_core::RunLocator;
use ld_platform::{PlatformResult, Recipe, RunDetails, RunHandle, RunStatus};
use serde_json::json;
use zip::write::FileOptions;
use zip::ZipWriter;

const GRID_METRICS: [&str; 5] = [
    "illuminance-9am",
    "illuminance-3pm",
    "pass-fail-9am",
    "pass-fail-3pm",
    "pass-fail-combined",
];

fn zip_archive(entries: &[(&str, String)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, FileOptions::default())
            .expect("failed to start zip entry");
        writer
            .write_all(content.as_bytes())
            .expect("failed to write zip entry");
    }
    writer.finish().expect("failed to finish zip").into_inner()
}

fn model_document() -> serde_json::Value {
    json!({
        "identifier": "office",
        "rooms": [{
            "identifier": "room_1",
            "faces": [{
                "identifier": "room_1_floor",
                "geometry": {
                    "boundary": [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [4.0, 4.0, 0.0], [0.0, 4.0, 0.0]]
                }
            }]
        }],
        "properties": {
            "radiance": {
                "sensor_grids": [{
                    "identifier": "room_1",
                    "sensors": [
                        {"pos": [1.0, 1.0, 0.8], "dir": [0.0, 0.0, 1.0]},
                        {"pos": [2.0, 1.0, 0.8], "dir": [0.0, 0.0, 1.0]},
                        {"pos": [3.0, 1.0, 0.8], "dir": [0.0, 0.0, 1.0]}
                    ]
                }]
            }
        }
    })
}

struct FakeRun {
    details: RunDetails,
    downloads: RefCell<Vec<String>>,
}

impl FakeRun {
    fn new(run_id: &str, status: RunStatus, tag: &str) -> Self {
        Self {
            details: RunDetails {
                locator: RunLocator::new("acme", "office", "job-1", run_id),
                status,
                recipe: Recipe {
                    owner: "pollination".to_string(),
                    name: "leed-daylight-option-two".to_string(),
                    tag: tag.to_string(),
                },
                started_at: None,
                finished_at: None,
            },
            downloads: RefCell::new(Vec::new()),
        }
    }

    fn download_count(&self) -> usize {
        self.downloads.borrow().len()
    }
}

impl RunHandle for FakeRun {
    fn details(&self) -> &RunDetails {
        &self.details
    }

    fn download_output(&self, name: &str) -> PlatformResult<Vec<u8>> {
        self.downloads.borrow_mut().push(name.to_string());
        let archive = match name {
            "credit-summary" => zip_archive(&[(
                "credit_summary.json",
                json!({"credits": 4, "percentage_passing": 87.5}).to_string(),
            )]),
            "space-summary" => zip_archive(&[(
                "space_summary.csv",
                "Name,Area (m2),Area (ft2),Spacing (m),% Passing 9AM,% Passing 3PM,% Passing Combined\n\
                 Open Office,92.9031,1000,0.6096,95.5,88.25,87.5\n"
                    .to_string(),
            )]),
            metric => {
                let values = if metric.starts_with("pass-fail") {
                    "0\n1\n1\n"
                } else {
                    "400.0\n900.0\n2800.0\n"
                };
                zip_archive(&[
                    (
                        "grids_info.json",
                        json!([{"identifier": "room_1", "full_id": "room_1", "count": 3}])
                            .to_string(),
                    ),
                    ("room_1.res", values.to_string()),
                ])
            }
        };
        Ok(archive)
    }

    fn model_document(&self) -> PlatformResult<serde_json::Value> {
        Ok(model_document())
    }
}

#[test]
fn scenario_a_succeeded_run_yields_reports_and_one_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ArtifactCache::new(dir.path()).unwrap();
    let run = FakeRun::new("abc123", RunStatus::Succeeded, "0.3.5");

    let artifacts = load_run(&run, &cache).expect("pipeline failed");

    assert_eq!(artifacts.credit_summary.credits, 4.0);
    assert_eq!(artifacts.credit_summary.percentage_passing, 87.5);
    assert!(artifacts.vis_set_path.is_file());

    let table = artifacts.space_summary.load().expect("space summary load");
    for column in [
        "Area (m2)",
        "Area (ft2)",
        "Spacing (m)",
        "% Passing 9AM",
        "% Passing 3PM",
        "% Passing Combined",
    ] {
        assert!(table.columns.iter().any(|c| c == column), "missing {column}");
    }

    // Exactly one packaged scene in the bundle root.
    let artifact_count = std::fs::read_dir(artifacts.bundle.root())
        .unwrap()
        .filter(|entry| {
            entry
                .as_ref()
                .unwrap()
                .file_name()
                .to_string_lossy()
                .ends_with(".vtkjs")
        })
        .count();
    assert_eq!(artifact_count, 1);

    // The metric folders are self-describing.
    for metric in GRID_METRICS {
        assert!(artifacts
            .bundle
            .output_dir(metric)
            .join("vis_metadata.json")
            .is_file());
    }
}

#[test]
fn scenario_b_old_recipe_version_halts_before_any_download() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ArtifactCache::new(dir.path()).unwrap();
    let run = FakeRun::new("abc123", RunStatus::Succeeded, "0.3.2");

    let err = load_run(&run, &cache).expect_err("should halt");
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("0.3.4"));
    assert!(err.to_string().contains("0.3.2"));
    assert_eq!(run.download_count(), 0);
    assert!(!cache.data_dir().join("abc123").exists());
}

#[test]
fn unfinished_run_is_rejected_before_any_download() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ArtifactCache::new(dir.path()).unwrap();
    let run = FakeRun::new("abc123", RunStatus::Failed, "0.3.5");

    let err = load_run(&run, &cache).expect_err("should halt");
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(run.download_count(), 0);
}

#[test]
fn scenario_c_cached_bundle_regenerates_artifact_without_downloads() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ArtifactCache::new(dir.path()).unwrap();

    let first = FakeRun::new("abc123", RunStatus::Succeeded, "0.3.5");
    let artifacts = load_run(&first, &cache).expect("first load failed");
    std::fs::remove_file(&artifacts.vis_set_path).unwrap();

    let second = FakeRun::new("abc123", RunStatus::Succeeded, "0.3.5");
    let artifacts = load_run(&second, &cache).expect("second load failed");

    assert_eq!(second.download_count(), 0, "expected a pure cache hit");
    assert!(artifacts.vis_set_path.is_file(), "artifact not regenerated");
}
