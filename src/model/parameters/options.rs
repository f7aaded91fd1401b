use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use super::{LinkParameter, QueryPair};

/// How long the generated short path should be
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum PathLength {
    /// Long path that cannot be guessed; for user-specific content
    #[default]
    Unguessable,
    /// Short path; only for content that is safe to be discovered
    Short,
}

impl PathLength {
    /// Numeric value carried alongside the name
    pub fn value(self) -> u8 {
        match self {
            Self::Unguessable => 0,
            Self::Short => 1,
        }
    }
}

impl std::fmt::Display for PathLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Link-level options. Always projected, since it carries a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsParameters {
    pub path_length: PathLength,
}

impl OptionsParameters {
    pub fn new(path_length: PathLength) -> Self {
        Self { path_length }
    }
}

impl LinkParameter for OptionsParameters {
    fn project(&self) -> Vec<QueryPair> {
        vec![("pathLength", self.path_length.to_string())]
    }
}
