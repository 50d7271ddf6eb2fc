// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for plugin descriptions.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported instead of silently producing an incomplete manifest.

use serde::{Deserialize, Serialize};
use strawberry_core::{Authors, Dependencies, LoadOrder};

/// Top-level Strawberry configuration.
///
/// A section left empty targets no platform for that host; the descriptor
/// registry decides applicability from the identity fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StrawberryConfig {
    /// Build-provided defaults.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Paper (`plugin.yml`) description.
    #[serde(default)]
    pub paper: PaperConfig,

    /// Velocity (`velocity-plugin.json`) description.
    #[serde(default)]
    pub velocity: VelocityConfig,
}

/// Project-level values used when a platform section does not override them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project version.
    #[serde(default = "default_project_version")]
    pub version: String,

    /// Project description.
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectConfig {
    pub fn new(version: impl Into<String>, description: Option<String>) -> Self {
        Self {
            version: version.into(),
            description,
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            version: default_project_version(),
            description: None,
        }
    }
}

fn default_project_version() -> String {
    "unspecified".to_string()
}

/// Paper plugin description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PaperConfig {
    /// Fully qualified class the server instantiates.
    #[serde(default)]
    pub main: Option<String>,

    /// Plugin name; letters, digits, spaces, `.`, `_` and `-` only.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub authors: Authors,

    /// Startup phase; defaults to `POSTWORLD`.
    #[serde(default)]
    pub load: LoadOrder,

    #[serde(default)]
    pub dependencies: Dependencies,

    /// Server API version the plugin targets, e.g. `1.20`.
    #[serde(default)]
    pub api_version: Option<String>,
}

/// Velocity plugin description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VelocityConfig {
    /// Fully qualified class the proxy instantiates.
    #[serde(default)]
    pub main: Option<String>,

    /// Plugin id; lower-case, at most 64 characters.
    #[serde(default)]
    pub id: Option<String>,

    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,

    /// Overrides the project version. Must not be blank when set.
    #[serde(default)]
    pub version: Option<String>,

    /// Overrides the project description. Must not be blank when set.
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub authors: Authors,

    #[serde(default)]
    pub dependencies: Dependencies,
}
