use crate::domain::{AppError, GitHubRepo};

/// Port for looking up the newest published tag of a repository.
pub trait TagSource {
    /// Latest tag of `repo`, or `None` when it has no tags.
    fn latest_tag(&self, repo: &GitHubRepo) -> Result<Option<String>, AppError>;
}
