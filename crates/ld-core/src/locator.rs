use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Identity of one simulation run on the platform.
///
/// A run is addressed by four path segments:
/// `<owner>/projects/<project>/studies/<job>/runs/<run>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLocator {
    pub owner: String,
    pub project: String,
    pub job_id: String,
    pub run_id: String,
}

impl RunLocator {
    pub fn new(
        owner: impl Into<String>,
        project: impl Into<String>,
        job_id: impl Into<String>,
        run_id: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            project: project.into(),
            job_id: job_id.into(),
            run_id: run_id.into(),
        }
    }

    /// Parse a run URL as shared from the platform web app, e.g.
    /// `https://app.pollination.cloud/acme/projects/office/studies/123/runs/abc`.
    pub fn from_url(url: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidRunUrl {
            url: url.to_string(),
        };

        let path = url
            .trim_end_matches('/')
            .split("://")
            .last()
            .ok_or_else(invalid)?;
        let segments: Vec<&str> = path.split('/').collect();

        // Trailing seven segments carry the identity; anything before
        // them is the host.
        if segments.len() < 7 {
            return Err(invalid());
        }
        let tail = &segments[segments.len() - 7..];
        match tail {
            [owner, "projects", project, "studies", job_id, "runs", run_id] => Ok(Self::new(
                owner.to_string(),
                project.to_string(),
                job_id.to_string(),
                run_id.to_string(),
            )),
            _ => Err(invalid()),
        }
    }

    /// Format the shareable run URL for a given host.
    pub fn to_url(&self, host: &str) -> String {
        format!(
            "{}/{}/projects/{}/studies/{}/runs/{}",
            host.trim_end_matches('/'),
            self.owner,
            self.project,
            self.job_id,
            self.run_id
        )
    }
}
