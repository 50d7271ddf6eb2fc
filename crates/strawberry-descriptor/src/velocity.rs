// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Velocity `velocity-plugin.json` generation.

use serde::Serialize;
use strawberry_config::{ProjectConfig, VelocityConfig};
use strawberry_core::{Platform, Result, StrawberryError};

use crate::rules;

/// Manifest file name read by the Velocity proxy.
pub const FILE_NAME: &str = "velocity-plugin.json";

/// Field order here is the key order of the written document.
#[derive(Debug, Serialize)]
struct VelocityDescriptor<'a> {
    id: &'a str,
    name: &'a str,
    main: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    authors: Vec<&'a str>,
    dependencies: Vec<VelocityDependency<'a>>,
}

#[derive(Debug, Serialize)]
struct VelocityDependency<'a> {
    id: &'a str,
    optional: bool,
}

/// Velocity is targeted once both `main` and `id` are set.
pub fn is_applicable(velocity: &VelocityConfig) -> bool {
    rules::is_present(velocity.main.as_deref()) && rules::is_present(velocity.id.as_deref())
}

pub fn validate(velocity: &VelocityConfig) -> Result<()> {
    rules::check_velocity_id(velocity.id.as_deref().unwrap_or_default())?;
    rules::check_main_namespace(
        Platform::Velocity,
        velocity.main.as_deref().unwrap_or_default(),
    )?;
    rules::check_override(Platform::Velocity, "version", velocity.version.as_deref())?;
    rules::check_override(
        Platform::Velocity,
        "description",
        velocity.description.as_deref(),
    )
}

pub fn render(velocity: &VelocityConfig, project: &ProjectConfig) -> Result<String> {
    let description = velocity
        .description
        .as_deref()
        .or(project.description.as_deref())
        .filter(|d| !d.trim().is_empty());

    let descriptor = VelocityDescriptor {
        id: velocity.id.as_deref().unwrap_or_default(),
        name: velocity.name.as_deref().unwrap_or_default(),
        main: velocity.main.as_deref().unwrap_or_default(),
        version: velocity.version.as_deref().unwrap_or(&project.version),
        description,
        authors: velocity.authors.iter().collect(),
        dependencies: velocity
            .dependencies
            .iter()
            .map(|d| VelocityDependency {
                id: d.id(),
                optional: d.is_optional(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&descriptor)
        .map_err(|e| StrawberryError::Serialization(e.to_string()))
}
