//! Fetch origins of a dependency.

use serde::Deserialize;
use url::Url;

use super::SchemaError;
use crate::domain::AppError;

/// The only git host whose archives can be addressed by tag.
pub const SUPPORTED_GIT_HOST: &str = "github.com";

const SSH_PREFIX: &str = "git@github.com:";

/// `git` sub-record of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitOrigin {
    pub repository: String,
    pub tag: String,
}

/// Declared source of a dependency's code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOrigin {
    Git(GitOrigin),
    Urls(Vec<String>),
}

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepo {
    pub owner: String,
    pub name: String,
}

impl GitHubRepo {
    /// Archive URL of `tag`.
    pub fn archive_url(&self, tag: &str) -> String {
        format!("https://github.com/{}/{}/archive/{}.zip", self.owner, self.name, tag)
    }

    /// File name the archive of `tag` is stored under.
    pub fn archive_name(&self, tag: &str) -> String {
        format!("{}-{}.zip", self.name, tag)
    }
}

impl GitOrigin {
    /// Parse the repository URL of `dependency` into its GitHub owner and name.
    ///
    /// Accepts `https://github.com/owner/repo(.git)` URLs and the
    /// `git@github.com:owner/repo(.git)` SSH shorthand.
    pub fn github_repo(&self, dependency: &str) -> Result<GitHubRepo, AppError> {
        let invalid = || SchemaError::InvalidRepository {
            dependency: dependency.to_string(),
            repository: self.repository.clone(),
        };

        let path = if let Some(rest) = self.repository.strip_prefix(SSH_PREFIX) {
            rest.to_string()
        } else {
            let url = Url::parse(&self.repository).map_err(|_| invalid())?;
            let host = url.host_str().unwrap_or_default();
            if host != SUPPORTED_GIT_HOST {
                return Err(AppError::UnsupportedOrigin {
                    dependency: dependency.to_string(),
                    host: host.to_string(),
                });
            }
            url.path().to_string()
        };

        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        let owner = segments.next().ok_or_else(invalid)?;
        let name = segments.next().ok_or_else(invalid)?;
        let name = name.strip_suffix(".git").unwrap_or(name);
        if name.is_empty() {
            return Err(invalid().into());
        }

        Ok(GitHubRepo { owner: owner.to_string(), name: name.to_string() })
    }
}
