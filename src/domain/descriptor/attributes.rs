//! Attribute families and their scoped variants.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use super::values::Scalar;

/// Visibility scope of a target attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Public,
    Private,
    Interface,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Public => "PUBLIC",
            Scope::Private => "PRIVATE",
            Scope::Interface => "INTERFACE",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-name prefixes of the four scoped variants, in emission order.
///
/// `None` is the unscoped variant, which takes the target kind's default scope.
pub const SCOPED_VARIANTS: [(&str, Option<Scope>); 4] = [
    ("", None),
    ("public_", Some(Scope::Public)),
    ("private_", Some(Scope::Private)),
    ("interface_", Some(Scope::Interface)),
];

/// A category of target configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Includes,
    Defines,
    Options,
    Features,
    Links,
    LinkDirectories,
    LinkOptions,
    PrecompileHeaders,
}

impl Family {
    /// All families in emission order.
    pub const ALL: [Family; 8] = [
        Family::Includes,
        Family::Defines,
        Family::Options,
        Family::Features,
        Family::Links,
        Family::LinkDirectories,
        Family::LinkOptions,
        Family::PrecompileHeaders,
    ];

    /// Unscoped descriptor field name.
    pub fn key(&self) -> &'static str {
        match self {
            Family::Includes => "includes",
            Family::Defines => "defines",
            Family::Options => "options",
            Family::Features => "features",
            Family::Links => "links",
            Family::LinkDirectories => "link_directories",
            Family::LinkOptions => "link_options",
            Family::PrecompileHeaders => "precompile_headers",
        }
    }

    /// CMake command emitting this family.
    pub fn command(&self) -> &'static str {
        match self {
            Family::Includes => "target_include_directories",
            Family::Defines => "target_compile_definitions",
            Family::Options => "target_compile_options",
            Family::Features => "target_compile_features",
            Family::Links => "target_link_libraries",
            Family::LinkDirectories => "target_link_directories",
            Family::LinkOptions => "target_link_options",
            Family::PrecompileHeaders => "target_precompile_headers",
        }
    }

    /// Whether entries are path references resolved against the dependency.
    pub fn resolves_paths(&self) -> bool {
        matches!(self, Family::Includes | Family::LinkDirectories)
    }

    /// Whether the declaration carries the `SYSTEM` qualifier.
    pub fn is_system(&self) -> bool {
        matches!(self, Family::Includes)
    }

    /// Check whether `field` names one of the scoped variants of any family.
    pub fn is_attribute_field(field: &str) -> bool {
        SCOPED_VARIANTS.iter().any(|(prefix, _)| {
            field
                .strip_prefix(prefix)
                .is_some_and(|rest| Family::ALL.iter().any(|family| family.key() == rest))
        })
    }
}

/// One normalized attribute entry.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeEntry {
    /// A list element or a bare string.
    Item(String),
    /// A mapping pair; `None` when the descriptor wrote `null`.
    Pair { key: String, value: Option<Scalar> },
}

/// Raw shape of an attribute field as written in a descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    One(String),
    Many(Vec<String>),
    Map(IndexMap<String, Option<Scalar>>),
}

impl AttributeValue {
    pub fn into_entries(self) -> Vec<AttributeEntry> {
        match self {
            AttributeValue::One(item) => vec![AttributeEntry::Item(item)],
            AttributeValue::Many(items) => items.into_iter().map(AttributeEntry::Item).collect(),
            AttributeValue::Map(pairs) => pairs
                .into_iter()
                .map(|(key, value)| AttributeEntry::Pair { key, value })
                .collect(),
        }
    }
}

/// Normalized attribute fields of a target, keyed by descriptor field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    fields: BTreeMap<String, Vec<AttributeEntry>>,
    /// Target properties, in descriptor order.
    pub properties: IndexMap<String, Scalar>,
}

impl AttributeSet {
    pub fn insert(&mut self, field: impl Into<String>, entries: Vec<AttributeEntry>) {
        self.fields.insert(field.into(), entries);
    }

    /// Entries of the field named `field`, empty when absent.
    pub fn get(&self, field: &str) -> &[AttributeEntry] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.fields.values().all(Vec::is_empty)
    }
}
