// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Merge order (later overrides earlier): compiled defaults, the TOML file,
//! then `STRAWBERRY_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::StrawberryConfig;

/// Default configuration file, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "strawberry.toml";

/// Sections that may be overridden from the environment.
const ENV_SECTIONS: [&str; 3] = ["project_", "paper_", "velocity_"];

/// Load `./strawberry.toml` with env var overrides.
pub fn load_config() -> Result<StrawberryConfig, figment::Error> {
    load_config_from_path(Path::new(DEFAULT_CONFIG_FILE))
}

/// Load configuration from a TOML string only (no file, no environment).
///
/// Used for testing and for hosts that assemble the description themselves.
pub fn load_config_from_str(toml_content: &str) -> Result<StrawberryConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StrawberryConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// A missing file is not an error; the defaults and environment still apply.
pub fn load_config_from_path(path: &Path) -> Result<StrawberryConfig, figment::Error> {
    build_figment(path).extract()
}

/// Build the Figment used for file-based loading (exposed for diagnostic use).
pub fn build_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(StrawberryConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
}

/// Map `STRAWBERRY_<SECTION>_<KEY>` to `<section>.<key>`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys such as
/// `api_version` contain underscores: `STRAWBERRY_PAPER_API_VERSION` must map
/// to `paper.api_version`, not `paper.api.version`.
fn env_provider() -> Env {
    Env::prefixed("STRAWBERRY_")
        .filter(|key| {
            let key = key.as_str().to_ascii_lowercase();
            ENV_SECTIONS.iter().any(|section| key.starts_with(section))
        })
        .map(|key| {
            let mapped = key
                .as_str()
                .to_ascii_lowercase()
                .replacen("project_", "project.", 1)
                .replacen("paper_", "paper.", 1)
                .replacen("velocity_", "velocity.", 1);
            mapped.into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("STRAWBERRY_PROJECT_VERSION", "2.0.0");
            jail.set_env("STRAWBERRY_PAPER_API_VERSION", "1.21");
            jail.set_env("STRAWBERRY_VELOCITY_ID", "from-env");
            jail.set_env("STRAWBERRY_LOG_LEVEL", "debug");

            let config = load_config_from_path(Path::new("missing.toml"))?;
            assert_eq!(config.project.version, "2.0.0");
            assert_eq!(config.paper.api_version.as_deref(), Some("1.21"));
            assert_eq!(config.velocity.id.as_deref(), Some("from-env"));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
[project]
version = "1.0.0"

[paper]
name = "FromFile"
main = "com.example.Foo"
"#,
            )?;
            jail.set_env("STRAWBERRY_PROJECT_VERSION", "1.0.1");

            let config = load_config()?;
            assert_eq!(config.project.version, "1.0.1");
            assert_eq!(config.paper.name.as_deref(), Some("FromFile"));
            Ok(())
        });
    }
}
