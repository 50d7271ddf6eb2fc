// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for Strawberry plugin descriptions.
//!
//! Provides TOML parsing with strict validation (`deny_unknown_fields`),
//! environment variable overrides, and miette diagnostics with typo
//! suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use strawberry_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("project version: {}", config.project.version);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str, DEFAULT_CONFIG_FILE};
pub use model::{PaperConfig, ProjectConfig, StrawberryConfig, VelocityConfig};

/// Load `./strawberry.toml` (plus environment overrides) and validate it.
pub fn load_and_validate() -> Result<StrawberryConfig, Vec<ConfigError>> {
    load_and_validate_path(Path::new(DEFAULT_CONFIG_FILE))
}

/// Load a specific configuration file (plus environment overrides) and validate it.
///
/// On a Figment error the file content is read back so unknown keys can be
/// reported with a source span.
pub fn load_and_validate_path(path: &Path) -> Result<StrawberryConfig, Vec<ConfigError>> {
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = read_source(path);
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<StrawberryConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Read a config file for error span resolution, keyed the way figment
/// reports file sources.
fn read_source(path: &Path) -> Vec<(String, String)> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    let resolved = std::fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string());
    vec![(resolved, content)]
}
