//! Target descriptors.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use super::attributes::{AttributeSet, AttributeValue, Family};
use super::values::{OneOrMany, Scalar};

/// The `type` tag of a target descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Static,
    Shared,
    Object,
    Interface,
    Imported,
    Subdirectory,
    Cmake,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Static => "static",
            TargetType::Shared => "shared",
            TargetType::Object => "object",
            TargetType::Interface => "interface",
            TargetType::Imported => "imported",
            TargetType::Subdirectory => "subdirectory",
            TargetType::Cmake => "cmake",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of library built from sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryKind {
    Static,
    Shared,
    Object,
}

impl LibraryKind {
    /// Library type keyword of `add_library`.
    pub fn keyword(&self) -> &'static str {
        match self {
            LibraryKind::Static => "STATIC",
            LibraryKind::Shared => "SHARED",
            LibraryKind::Object => "OBJECT",
        }
    }

    /// Whether the library is kept out of the default build.
    pub fn excluded_from_all(&self) -> bool {
        matches!(self, LibraryKind::Static | LibraryKind::Shared)
    }
}

/// Shape of a target, with the fields meaningful for that shape.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetKind {
    Library { kind: LibraryKind, srcs: Vec<String>, attributes: AttributeSet },
    Interface { attributes: AttributeSet },
    Imported,
    Subdirectory { cache: IndexMap<String, Scalar> },
    Cmake { file: String },
}

/// One target of a dependency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawTarget")]
pub struct TargetDescriptor {
    /// Sub-name, composed into `dependency.name`.
    pub name: Option<String>,
    /// Descriptor-relative subtree this target's paths resolve against.
    pub root: Option<String>,
    pub kind: TargetKind,
    pub aliases: IndexMap<String, String>,
    pub extra_cmake: Vec<String>,
}

impl TargetDescriptor {
    /// Target identifier used in emitted statements.
    pub fn id(&self, dependency: &str) -> String {
        match &self.name {
            Some(name) => format!("{}.{}", dependency, name),
            None => dependency.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    #[serde(rename = "type")]
    target_type: TargetType,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    root: Option<String>,
    #[serde(default)]
    srcs: Option<OneOrMany<String>>,
    #[serde(default)]
    cache: Option<IndexMap<String, Scalar>>,
    #[serde(default)]
    file: Option<String>,
    #[serde(default)]
    properties: Option<IndexMap<String, Scalar>>,
    #[serde(default)]
    aliases: IndexMap<String, String>,
    #[serde(default)]
    extra_cmake: OneOrMany<String>,
    /// Attribute fields plus any key the target type does not use.
    #[serde(flatten)]
    rest: IndexMap<String, serde_json::Value>,
}

impl RawTarget {
    /// Attribute fields and properties; keys that name no attribute family are ignored.
    fn attributes(&mut self) -> Result<AttributeSet, String> {
        let mut attributes = AttributeSet::default();
        for (field, value) in std::mem::take(&mut self.rest) {
            if !Family::is_attribute_field(&field) {
                continue;
            }
            let value = AttributeValue::deserialize(value)
                .map_err(|e| format!("invalid attribute field `{}`: {}", field, e))?;
            attributes.insert(field, value.into_entries());
        }
        attributes.properties = self.properties.take().unwrap_or_default();
        Ok(attributes)
    }

    fn library(mut self, kind: LibraryKind) -> Result<TargetKind, String> {
        let attributes = self.attributes()?;
        let srcs = self.srcs.map(OneOrMany::into_vec).unwrap_or_default();
        Ok(TargetKind::Library { kind, srcs, attributes })
    }
}

impl TryFrom<RawTarget> for TargetDescriptor {
    type Error = String;

    /// Fields the target type does not use are dropped, never rejected.
    fn try_from(mut raw: RawTarget) -> Result<Self, Self::Error> {
        let name = raw.name.take();
        let root = raw.root.take();
        let aliases = std::mem::take(&mut raw.aliases);
        let extra_cmake = std::mem::take(&mut raw.extra_cmake).into_vec();

        let target_type = raw.target_type;
        let kind = match target_type {
            TargetType::Static => raw.library(LibraryKind::Static)?,
            TargetType::Shared => raw.library(LibraryKind::Shared)?,
            TargetType::Object => raw.library(LibraryKind::Object)?,
            TargetType::Interface => TargetKind::Interface { attributes: raw.attributes()? },
            TargetType::Imported => TargetKind::Imported,
            TargetType::Subdirectory => {
                TargetKind::Subdirectory { cache: raw.cache.unwrap_or_default() }
            }
            TargetType::Cmake => TargetKind::Cmake {
                file: raw.file.ok_or_else(|| "`cmake` targets require field `file`".to_string())?,
            },
        };

        Ok(Self { name, root, kind, aliases, extra_cmake })
    }
}
