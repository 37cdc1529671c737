//! Blocking HTTP client for the Pollination API.

use chrono::{DateTime, Utc};
use ld_core::RunLocator;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::run::RunHandle;
use crate::types::{Recipe, RunDetails, RunStatus};
use crate::{PlatformError, PlatformResult};

pub const DEFAULT_API_HOST: &str = "https://api.pollination.cloud";

const AUTH_HEADER: &str = "x-pollination-token";

/// Thin synchronous client around the platform's REST endpoints.
#[derive(Clone)]
pub struct PollinationClient {
    http: reqwest::blocking::Client,
    host: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RunPayload {
    status: StatusPayload,
    recipe: RecipePayload,
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    status: RunStatus,
    #[serde(default)]
    started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    inputs: Vec<InputPayload>,
}

#[derive(Debug, Deserialize)]
struct InputPayload {
    name: String,
    #[serde(default)]
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecipePayload {
    owner: String,
    name: String,
    tag: String,
}

impl PollinationClient {
    pub fn new(host: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            host: host.into(),
            token,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn get(&self, url: &str) -> PlatformResult<reqwest::blocking::Response> {
        debug!(url, "platform request");
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.header(AUTH_HEADER, token);
        }
        let response = request.send()?;
        if !response.status().is_success() {
            return Err(PlatformError::Api {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    /// Follow a signed-URL endpoint: the API responds with a JSON string
    /// pointing at the actual payload.
    fn get_signed(&self, url: &str) -> PlatformResult<reqwest::blocking::Response> {
        let signed_url: String = self.get(url)?.json()?;
        self.get(&signed_url)
    }

    /// Resolve a run locator into a live handle.
    pub fn resolve(&self, locator: &RunLocator) -> PlatformResult<PlatformRun> {
        let url = format!(
            "{}/projects/{}/{}/runs/{}",
            self.host, locator.owner, locator.project, locator.run_id
        );
        let payload: RunPayload = self.get(&url)?.json()?;

        let details = RunDetails {
            locator: locator.clone(),
            status: payload.status.status,
            recipe: Recipe {
                owner: payload.recipe.owner,
                name: payload.recipe.name,
                tag: payload.recipe.tag,
            },
            started_at: payload.status.started_at,
            finished_at: payload.status.finished_at,
        };
        let inputs = payload
            .status
            .inputs
            .into_iter()
            .filter_map(|input| input.path.map(|path| (input.name, path)))
            .collect();

        Ok(PlatformRun {
            client: self.clone(),
            details,
            inputs,
        })
    }
}

/// A resolved run backed by the HTTP client.
pub struct PlatformRun {
    client: PollinationClient,
    details: RunDetails,
    /// Input artifact name -> storage path, from the run's status payload.
    inputs: Vec<(String, String)>,
}

impl RunHandle for PlatformRun {
    fn details(&self) -> &RunDetails {
        &self.details
    }

    fn download_output(&self, name: &str) -> PlatformResult<Vec<u8>> {
        let locator = &self.details.locator;
        let url = format!(
            "{}/projects/{}/{}/runs/{}/outputs/{}",
            self.client.host, locator.owner, locator.project, locator.run_id, name
        );
        let bytes = self.client.get_signed(&url)?.bytes()?;
        Ok(bytes.to_vec())
    }

    fn model_document(&self) -> PlatformResult<Value> {
        let path = self
            .inputs
            .iter()
            .find(|(name, _)| name == "model")
            .map(|(_, path)| path.clone())
            .ok_or_else(|| PlatformError::MissingInput {
                name: "model".to_string(),
            })?;

        let locator = &self.details.locator;
        let url = format!(
            "{}/projects/{}/{}/jobs/{}/artifacts/download?path={}",
            self.client.host, locator.owner, locator.project, locator.job_id, path
        );
        let document = self.client.get_signed(&url)?.json()?;
        Ok(document)
    }
}
