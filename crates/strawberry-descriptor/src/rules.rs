// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation rules shared by the platform generators.

use std::sync::LazyLock;

use regex::Regex;
use strawberry_core::{Platform, Result, StrawberryError};

/// Package prefixes owned by the server software itself. A plugin entry point
/// inside one of them would shadow server internals.
pub const RESERVED_NAMESPACES: [&str; 4] = [
    "net.minecraft.",
    "org.bukkit.",
    "io.papermc.paper.",
    "com.destroystokoyo.paper.",
];

/// Allowed Paper plugin names.
pub const PAPER_NAME_PATTERN: &str = r"^[A-Za-z0-9 _.-]+$";

/// Allowed Velocity plugin ids: lower-case start, 64 characters at most.
pub const VELOCITY_ID_PATTERN: &str = r"^[a-z][a-z0-9_-]{0,63}$";

static PAPER_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(PAPER_NAME_PATTERN).unwrap());

static VELOCITY_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(VELOCITY_ID_PATTERN).unwrap());

/// True when the value is set and not just whitespace.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Reject a `main` class inside a reserved namespace (case-insensitive).
pub fn check_main_namespace(platform: Platform, main: &str) -> Result<()> {
    let lowered = main.to_lowercase();
    match RESERVED_NAMESPACES
        .iter()
        .find(|namespace| lowered.starts_with(*namespace))
    {
        Some(namespace) => Err(StrawberryError::invalid(
            platform,
            "main",
            format!("`{main}` may not be within the {namespace} namespace"),
        )),
        None => Ok(()),
    }
}

pub fn check_paper_name(name: &str) -> Result<()> {
    if PAPER_NAME.is_match(name) {
        Ok(())
    } else {
        Err(StrawberryError::invalid(
            Platform::Paper,
            "name",
            format!("`{name}` should match {PAPER_NAME_PATTERN}"),
        ))
    }
}

pub fn check_velocity_id(id: &str) -> Result<()> {
    if VELOCITY_ID.is_match(id) {
        Ok(())
    } else {
        Err(StrawberryError::invalid(
            Platform::Velocity,
            "id",
            format!("`{id}` should match {VELOCITY_ID_PATTERN}"),
        ))
    }
}

/// An override may be absent, but once set it must carry content.
pub fn check_override(platform: Platform, field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if v.trim().is_empty() => Err(StrawberryError::invalid(
            platform,
            field,
            "must not be blank when set",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reserved_namespaces_are_rejected_for_both_platforms() {
        for platform in [Platform::Paper, Platform::Velocity] {
            for main in [
                "net.minecraft.server.Plugin",
                "org.bukkit.Plugin",
                "io.papermc.paper.Plugin",
                "com.destroystokoyo.paper.Plugin",
            ] {
                let err = check_main_namespace(platform, main).unwrap_err();
                assert!(err.is_invalid_description());
                assert!(err.to_string().contains("namespace"), "{err}");
            }
        }
    }

    #[test]
    fn namespace_check_ignores_case() {
        assert!(check_main_namespace(Platform::Paper, "Net.Minecraft.Foo").is_err());
        assert!(check_main_namespace(Platform::Paper, "ORG.BUKKIT.Foo").is_err());
    }

    #[test]
    fn namespace_prefix_needs_the_dot() {
        assert!(check_main_namespace(Platform::Paper, "org.bukkitplugins.Foo").is_ok());
        assert!(check_main_namespace(Platform::Velocity, "com.example.Foo").is_ok());
    }

    #[test]
    fn paper_names() {
        for name in ["Foo Bar", "foo_bar-1.2", "X"] {
            assert!(check_paper_name(name).is_ok(), "{name}");
        }
        for name in ["", "Foo!", "Föö", "foo/bar", "foo\n"] {
            assert!(check_paper_name(name).is_err(), "{name:?}");
        }
    }

    #[test]
    fn velocity_ids() {
        assert!(check_velocity_id("my-plugin_2").is_ok());
        assert!(check_velocity_id(&"a".repeat(64)).is_ok());
        for id in ["Plugin", "1abc", "", "-abc", "foo.bar", "foo\n"] {
            assert!(check_velocity_id(id).is_err(), "{id:?}");
        }
        assert!(check_velocity_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn overrides_may_be_absent_but_not_blank() {
        assert!(check_override(Platform::Velocity, "version", None).is_ok());
        assert!(check_override(Platform::Velocity, "version", Some("1.0")).is_ok());
        let err = check_override(Platform::Velocity, "description", Some("  ")).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn presence_requires_content() {
        assert!(is_present(Some("x")));
        assert!(!is_present(Some(" \t")));
        assert!(!is_present(None));
    }

    proptest! {
        #[test]
        fn well_formed_ids_pass(id in "[a-z][a-z0-9_-]{0,63}") {
            prop_assert!(check_velocity_id(&id).is_ok());
        }

        #[test]
        fn ids_with_upper_case_start_fail(id in "[A-Z][a-z0-9_-]{0,20}") {
            prop_assert!(check_velocity_id(&id).is_err());
        }

        #[test]
        fn overlong_ids_fail(id in "[a-z]{65,80}") {
            prop_assert!(check_velocity_id(&id).is_err());
        }

        #[test]
        fn reserved_prefix_always_fails(suffix in "[A-Za-z.]{0,20}") {
            let main = format!("net.minecraft.{suffix}");
            prop_assert!(check_main_namespace(Platform::Paper, &main).is_err());
            prop_assert!(check_main_namespace(Platform::Velocity, &main).is_err());
        }
    }
}
