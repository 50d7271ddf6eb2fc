// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `strawberry generate`, `validate` and `platforms` command implementations.

use std::path::{Path, PathBuf};

use strawberry_config::{ConfigError, StrawberryConfig};
use strawberry_core::StrawberryError;
use strawberry_descriptor::{applicable_generators, generate_descriptors, validate_all};

/// Default directory for generated manifests, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "build/generated";

/// Load and validate the plugin description at `path`.
///
/// Unlike the library loader, the command line requires the file to exist:
/// running without one is almost always a wrong working directory.
pub fn load_config(path: &Path) -> Result<StrawberryConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::Other(format!(
            "configuration file not found: {}",
            path.display()
        ))]);
    }
    strawberry_config::load_and_validate_path(path)
}

/// Run `strawberry generate`: validate every platform, then write the manifests.
pub fn run_generate(
    config: &StrawberryConfig,
    output: &Path,
) -> Result<Vec<PathBuf>, StrawberryError> {
    let written = generate_descriptors(config, output)?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(written)
}

/// Run `strawberry validate`. Nothing is written.
pub fn run_validate(config: &StrawberryConfig) -> Result<(), StrawberryError> {
    let generators = applicable_generators(config);
    validate_all(&generators)?;

    if generators.is_empty() {
        println!("no platform configured");
    } else {
        let names: Vec<String> = generators.iter().map(|g| g.platform().to_string()).collect();
        println!("plugin description is valid for: {}", names.join(", "));
    }
    Ok(())
}

/// Run `strawberry platforms`: one line per applicable platform.
pub fn run_platforms(config: &StrawberryConfig) -> Vec<String> {
    let lines: Vec<String> = applicable_generators(config)
        .iter()
        .map(|g| format!("{}\t{}", g.platform(), g.file_name()))
        .collect();
    for line in &lines {
        println!("{line}");
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAPER_ONLY: &str = r#"
[project]
version = "2.0.0"

[paper]
name = "Foo"
main = "com.example.Foo"
"#;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("strawberry.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let errors = load_config(&dir.path().join("strawberry.toml")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("not found"));
    }

    #[test]
    fn generate_writes_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&write_config(dir.path(), PAPER_ONLY)).unwrap();
        let out = dir.path().join(DEFAULT_OUTPUT_DIR);

        let written = run_generate(&config, &out).unwrap();
        assert_eq!(written, vec![out.join("plugin.yml")]);
        let yaml = std::fs::read_to_string(&written[0]).unwrap();
        assert!(yaml.contains("version: \"2.0.0\"\n"));
    }

    #[test]
    fn validate_reports_rule_violation() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[paper]\nname = \"Foo!\"\nmain = \"com.example.Foo\"\n",
        );
        let config = load_config(&path).unwrap();
        let err = run_validate(&config).unwrap_err();
        assert!(err.is_invalid_description());
    }

    #[test]
    fn platforms_lists_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&write_config(dir.path(), PAPER_ONLY)).unwrap();
        assert_eq!(run_platforms(&config), vec!["paper\tplugin.yml".to_string()]);
    }
}
