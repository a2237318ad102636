//! GitHub tags lookup using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, GitHubApiConfig, GitHubRepo};
use crate::ports::TagSource;

const GITHUB_JSON: &str = "application/vnd.github+json";
const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";

/// HTTP client for the GitHub REST tags endpoint.
#[derive(Clone)]
pub struct GitHubTagClient {
    api_url: Url,
    token: Option<String>,
    client: Client,
}

impl std::fmt::Debug for GitHubTagClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubTagClient")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl GitHubTagClient {
    /// Create a client with an optional API token.
    pub fn new(token: Option<String>, config: &GitHubApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::GitHubApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_url: config.api_url.clone(), token, client })
    }

    /// Create a client reading the token from the configured environment variable.
    pub fn from_env_with_config(config: &GitHubApiConfig) -> Result<Self, AppError> {
        Self::new(config.token(), config)
    }

    fn tags_url(&self, repo: &GitHubRepo) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::InvalidConfig(format!("api_url '{}' cannot be a base", self.api_url))
            })?
            .pop_if_empty()
            .extend(["repos", repo.owner.as_str(), repo.name.as_str(), "tags"]);
        url.query_pairs_mut().append_pair("per_page", "1");
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct ApiTag {
    name: String,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl TagSource for GitHubTagClient {
    fn latest_tag(&self, repo: &GitHubRepo) -> Result<Option<String>, AppError> {
        let mut request = self
            .client
            .get(self.tags_url(repo)?)
            .header(USER_AGENT, concat!("depgen/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().map_err(|e| AppError::GitHubApi {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let tags: Vec<ApiTag> =
                serde_json::from_str(&body_text).map_err(|e| AppError::GitHubApi {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;
            return Ok(tags.into_iter().next().map(|tag| tag.name));
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if status == StatusCode::NOT_FOUND {
                format!("Repository {}/{} not found", repo.owner, repo.name)
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::GitHubApi { message, status: Some(status.as_u16()) })
    }
}
