//! Configure-time file generation actions.

use serde::Deserialize;

use super::values::Scalar;

/// How a configure action produces its output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigureKind {
    /// Template substitution of `input` into the output path.
    #[default]
    Configure,
    /// Generation at configure time from `content` or `input`.
    Generate,
}

/// One entry of a descriptor's `configure` mapping; the key is the output path.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ConfigureAction {
    #[serde(rename = "type", default)]
    pub kind: ConfigureKind,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub content: Option<Scalar>,
    #[serde(default)]
    pub condition: Option<String>,
}
