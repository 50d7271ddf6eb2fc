// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Strawberry configuration system.

use strawberry_config::diagnostic::ConfigError;
use strawberry_config::model::StrawberryConfig;
use strawberry_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};
use strawberry_core::LoadOrder;

/// A description targeting both platforms deserializes completely.
#[test]
fn valid_toml_deserializes_into_strawberry_config() {
    let toml = r#"
[project]
version = "1.0.0"
description = "An example plugin"

[paper]
name = "Foo Bar"
main = "com.example.Foo"
authors = ["Alice", "Bob"]
dependencies = [{ id = "Vault" }]

[velocity]
id = "foo-bar"
name = "FooBar"
main = "com.example.FooVelocity"
version = "1.0.0-velocity"
dependencies = [{ id = "luckperms", optional = true }]
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.project.version, "1.0.0");
    assert_eq!(config.project.description.as_deref(), Some("An example plugin"));
    assert_eq!(config.paper.name.as_deref(), Some("Foo Bar"));
    assert_eq!(config.paper.load, LoadOrder::PostWorld);
    assert_eq!(config.paper.authors.iter().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
    assert_eq!(config.velocity.id.as_deref(), Some("foo-bar"));
    assert_eq!(config.velocity.version.as_deref(), Some("1.0.0-velocity"));
    assert!(config.velocity.dependencies.get("luckperms").unwrap().is_optional());
}

/// Missing sections use defaults without error.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should deserialize");
    assert_eq!(config, StrawberryConfig::default());
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[bukkit]
name = "Foo"
"#;
    let err = load_config_from_str(toml).expect_err("unknown section should fail");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("bukkit"),
        "error should mention the unknown section, got: {err_str}"
    );
}

/// Unknown key "naem" in [paper] produces suggestion "did you mean `name`?"
#[test]
fn diagnostic_naem_suggests_name() {
    let toml = r#"
[paper]
naem = "Foo"
"#;
    let errors = load_and_validate_str(toml).expect_err("typo should fail");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey {
                key, suggestion, ..
            } => Some((key.clone(), suggestion.clone())),
            _ => None,
        })
        .expect("should report an unknown key");
    assert_eq!(unknown.0, "naem");
    assert_eq!(unknown.1.as_deref(), Some("name"));
}

/// Error output includes the list of valid keys for the section.
#[test]
fn diagnostic_error_includes_valid_keys() {
    let toml = r#"
[velocity]
identifier = "foo"
"#;
    let errors = load_and_validate_str(toml).expect_err("unknown key should fail");
    let has_valid_keys = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { valid_keys, .. } if valid_keys.contains("id") && valid_keys.contains("main"))
    });
    assert!(has_valid_keys, "should list valid velocity keys");
}

/// Invalid type (array where string expected) produces a clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[paper]
main = ["com.example.Foo"]
"#;
    let errors = load_and_validate_str(toml).expect_err("wrong type should fail");
    let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(
        rendered
            .iter()
            .any(|m| m.contains("invalid type") || m.contains("main")),
        "error should mention type mismatch, got: {rendered:?}"
    );
}

/// Unknown key in a file is reported with a source span pointing at it.
#[test]
fn unknown_key_in_file_has_source_span() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strawberry.toml");
    std::fs::write(&path, "[paper]\nname = \"Foo\"\napi_verison = \"1.20\"\n").unwrap();

    let errors = load_and_validate_path(&path).expect_err("typo should fail");
    let span = errors.iter().find_map(|e| match e {
        ConfigError::UnknownKey { span, suggestion, .. } => {
            assert_eq!(suggestion.as_deref(), Some("api_version"));
            *span
        }
        _ => None,
    });
    assert!(span.is_some(), "unknown key should carry a source span");
}

/// A missing file falls back to defaults.
#[test]
fn missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_and_validate_path(&dir.path().join("absent.toml"))
        .expect("missing file should not fail");
    assert!(config.paper.name.is_none());
    assert!(config.velocity.id.is_none());
}

/// ConfigError can be rendered using miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "naem".to_string(),
        suggestion: Some("name".to_string()),
        valid_keys: "main, name, version".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some(), "should have diagnostic code");
    let help = error.help().expect("should have help text").to_string();
    assert!(help.contains("did you mean `name`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("naem"));
}

/// Validation catches a blank project version.
#[test]
fn validation_catches_blank_project_version() {
    let toml = r#"
[project]
version = ""
"#;
    let errors = load_and_validate_str(toml).expect_err("blank version should fail");
    assert!(errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("project.version"))
    }));
}
