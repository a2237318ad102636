//! Tool configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::cmake::DEFAULT_FETCH_COMMAND;

/// Configuration loaded from `depgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Statement generation settings.
    #[serde(default)]
    pub generate: GenerateConfig,
    /// Upstream check settings.
    #[serde(default)]
    pub check: CheckConfig,
    /// GitHub API settings.
    #[serde(default)]
    pub github: GitHubApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generate.validate()?;
        self.check.validate()?;
        self.github.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// CMake function invoked to declare each dependency's download.
    #[serde(default = "default_fetch_command")]
    pub fetch_command: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { fetch_command: default_fetch_command() }
    }
}

impl GenerateConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let command = self.fetch_command.as_str();
        if command.is_empty() {
            return Err(AppError::InvalidConfig("fetch_command must not be empty".to_string()));
        }
        if !command.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AppError::InvalidConfig(format!(
                "fetch_command '{}' is not a valid CMake command name",
                command
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Descriptor document checked when none is given on the command line.
    #[serde(default = "default_descriptor")]
    pub descriptor: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { descriptor: default_descriptor() }
    }
}

impl CheckConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.descriptor.trim().is_empty() {
            return Err(AppError::InvalidConfig("descriptor must not be empty".to_string()));
        }
        Ok(())
    }
}

/// GitHub API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitHubApiConfig {
    /// GitHub REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Environment variable holding an optional API token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            token_env: default_token_env(),
        }
    }
}

impl GitHubApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "api_url must use http or https, got '{}'",
                self.api_url.scheme()
            )));
        }
        if self.token_env.trim().is_empty() {
            return Err(AppError::InvalidConfig("token_env must not be empty".to_string()));
        }
        Ok(())
    }

    /// API token read from the configured environment variable, if set and non-empty.
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env).ok().filter(|token| !token.trim().is_empty())
    }
}

fn default_fetch_command() -> String {
    DEFAULT_FETCH_COMMAND.to_string()
}

fn default_descriptor() -> String {
    "dependencies.json".to_string()
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}
