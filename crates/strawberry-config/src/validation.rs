// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! These checks cover values every platform relies on. Platform rules
//! (reserved namespaces, name and id patterns) belong to the descriptor
//! generators and run only for applicable platforms.

use strawberry_core::{Authors, Dependencies};

use crate::diagnostic::ConfigError;
use crate::model::StrawberryConfig;

/// Validate a deserialized configuration.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &StrawberryConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.project.version.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "project.version must not be empty".to_string(),
        });
    }

    check_authors("paper", &config.paper.authors, &mut errors);
    check_authors("velocity", &config.velocity.authors, &mut errors);
    check_dependencies("paper", &config.paper.dependencies, &mut errors);
    check_dependencies("velocity", &config.velocity.dependencies, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_authors(section: &str, authors: &Authors, errors: &mut Vec<ConfigError>) {
    for (i, author) in authors.iter().enumerate() {
        if author.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{section}.authors[{i}] must not be empty"),
            });
        }
    }
}

fn check_dependencies(section: &str, dependencies: &Dependencies, errors: &mut Vec<ConfigError>) {
    for (i, dependency) in dependencies.iter().enumerate() {
        if dependency.id().trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{section}.dependencies[{i}].id must not be empty"),
            });
        }
    }
}
