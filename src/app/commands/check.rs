//! Compare pinned git tags against the latest upstream tags.

use crate::domain::descriptor::FetchOrigin;
use crate::domain::{AppError, DependencyDescriptor};
use crate::ports::TagSource;

/// A dependency whose pinned tag is behind upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeNotice {
    pub name: String,
    pub from: String,
    pub to: String,
}

impl std::fmt::Display for UpgradeNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Upgrade {} from {} to {}", self.name, self.from, self.to)
    }
}

/// Look up the latest tag of every git-sourced dependency.
///
/// Dependencies fetched from plain URLs, or with no origin, are skipped, as are
/// repositories without tags.
pub fn execute(
    descriptors: &[DependencyDescriptor],
    tags: &impl TagSource,
) -> Result<Vec<UpgradeNotice>, AppError> {
    let mut notices = Vec::new();
    for descriptor in descriptors {
        let Some(FetchOrigin::Git(git)) = descriptor.origin() else {
            continue;
        };
        let repo = git.github_repo(&descriptor.name)?;
        let Some(latest) = tags.latest_tag(&repo)? else {
            continue;
        };
        if latest != git.tag {
            notices.push(UpgradeNotice { name: descriptor.name.clone(), from: git.tag, to: latest });
        }
    }
    Ok(notices)
}
