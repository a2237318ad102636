//! Dependency descriptor schema.
//!
//! Descriptor documents map dependency names to their fetch origin, configure
//! actions and targets. Field shapes that may be written several ways (a string
//! or a list, a list or a mapping) are normalized here, once, so the compiler
//! only sees canonical values.

mod attributes;
mod configure;
mod error;
mod origin;
mod target;
mod values;

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::domain::AppError;

pub use attributes::{AttributeEntry, AttributeSet, AttributeValue, Family, SCOPED_VARIANTS, Scope};
pub use configure::{ConfigureAction, ConfigureKind};
pub use error::SchemaError;
pub use origin::{FetchOrigin, GitHubRepo, GitOrigin, SUPPORTED_GIT_HOST};
pub use target::{LibraryKind, TargetDescriptor, TargetKind, TargetType};
pub use values::{OneOrMany, Scalar};

/// Serialization format of a descriptor document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptorFormat {
    #[default]
    Json,
    Yaml,
}

impl DescriptorFormat {
    /// Infer the format from a file extension; anything but `.yml`/`.yaml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => DescriptorFormat::Yaml,
            _ => DescriptorFormat::Json,
        }
    }
}

/// One dependency and everything emitted for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DependencyDescriptor {
    /// Key of the entry in the descriptor document.
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub git: Option<GitOrigin>,
    #[serde(default)]
    pub url: Option<OneOrMany<String>>,
    #[serde(default)]
    pub download_name: Option<String>,
    /// Configure actions keyed by output path.
    #[serde(default)]
    pub configure: IndexMap<String, ConfigureAction>,
    pub target: OneOrMany<TargetDescriptor>,
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
    #[serde(default)]
    pub extra_cmake: OneOrMany<String>,
}

impl DependencyDescriptor {
    /// Declared fetch origin; `git` wins over `url` when both are present.
    pub fn origin(&self) -> Option<FetchOrigin> {
        if let Some(git) = &self.git {
            return Some(FetchOrigin::Git(git.clone()));
        }
        self.url.clone().map(|urls| FetchOrigin::Urls(urls.into_vec()))
    }

    /// Targets in declaration order.
    pub fn targets(&self) -> &[TargetDescriptor] {
        match &self.target {
            OneOrMany::One(target) => std::slice::from_ref(target),
            OneOrMany::Many(targets) => targets,
        }
    }

    /// Alias pairs of the dependency followed by those declared on its targets.
    pub fn aliases(&self) -> Vec<(&str, &str)> {
        let own = self.aliases.iter();
        let nested = self.targets().iter().flat_map(|target| target.aliases.iter());
        own.chain(nested).map(|(alias, source)| (alias.as_str(), source.as_str())).collect()
    }

    /// Extra CMake includes of the dependency followed by those of its targets.
    pub fn extra_cmake(&self) -> Vec<&str> {
        let own: &[String] = match &self.extra_cmake {
            OneOrMany::One(path) => std::slice::from_ref(path),
            OneOrMany::Many(paths) => paths,
        };
        let nested = self.targets().iter().flat_map(|target| target.extra_cmake.iter());
        own.iter().chain(nested).map(String::as_str).collect()
    }
}

/// Parse a descriptor document, keeping the document's dependency order.
pub fn parse_descriptors(
    content: &str,
    format: DescriptorFormat,
) -> Result<Vec<DependencyDescriptor>, AppError> {
    let document: IndexMap<String, DependencyDescriptor> = match format {
        DescriptorFormat::Json => serde_json::from_str(content)
            .map_err(|e| SchemaError::Malformed(e.to_string()))?,
        DescriptorFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| SchemaError::Malformed(e.to_string()))?,
    };

    Ok(document
        .into_iter()
        .map(|(name, mut descriptor)| {
            descriptor.name = name;
            descriptor
        })
        .collect())
}
