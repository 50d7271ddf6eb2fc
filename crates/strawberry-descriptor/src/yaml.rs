// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered YAML document writer for `plugin.yml`.
//!
//! Output style: no `---` marker, plain scalars wherever `serde_yaml` would
//! leave them plain, numeric-looking strings and YAML 1.1 boolean words
//! always double-quoted, and sequence items indented under their key.

use strawberry_core::{Result, StrawberryError};

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Scalar(String),
    Sequence(Vec<String>),
}

/// A flat mapping of scalars and string sequences, rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YamlDocument {
    entries: Vec<(&'static str, Node)>,
}

impl YamlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.entries.push((key, Node::Scalar(value.into())));
        self
    }

    pub fn sequence<I, S>(&mut self, key: &'static str, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.entries.push((key, Node::Sequence(items)));
        self
    }

    /// Keys in the order they will be written.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        for (key, node) in &self.entries {
            match node {
                Node::Scalar(value) => {
                    out.push_str(&format!("{key}: {}\n", render_scalar(value)?));
                }
                Node::Sequence(items) if items.is_empty() => {
                    out.push_str(&format!("{key}: []\n"));
                }
                Node::Sequence(items) => {
                    out.push_str(&format!("{key}:\n"));
                    for item in items {
                        out.push_str(&format!("  - {}\n", render_scalar(item)?));
                    }
                }
            }
        }
        Ok(out)
    }
}

/// True for strings a YAML reader could take for a number, e.g. `1.0.0`,
/// `-2` or `.5`.
pub fn looks_numeric(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('+' | '-' | '.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Words a YAML 1.1 reader (SnakeYAML, as used by Paper) resolves to a
/// boolean or null when left plain.
const YAML_11_KEYWORDS: [&str; 9] = ["true", "false", "yes", "no", "y", "n", "on", "off", "null"];

/// True for strings a YAML 1.1 reader would not keep as a string, e.g. `Yes`
/// or `OFF`. Matching ignores case.
pub fn is_yaml_keyword(value: &str) -> bool {
    YAML_11_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(value))
}

fn render_scalar(value: &str) -> Result<String> {
    if looks_numeric(value) || is_yaml_keyword(value) || value.contains(['\n', '\r']) {
        return double_quoted(value);
    }

    let rendered =
        serde_yaml::to_string(value).map_err(|e| StrawberryError::Serialization(e.to_string()))?;
    let rendered = rendered.trim_end_matches('\n');
    let rendered = rendered.strip_suffix("\n...").unwrap_or(rendered);

    // Anything the emitter spread over several lines goes back on one.
    if rendered.contains('\n') {
        return double_quoted(value);
    }
    Ok(rendered.to_string())
}

/// A JSON string literal is also a valid YAML double-quoted scalar.
fn double_quoted(value: &str) -> Result<String> {
    serde_json::to_string(value).map_err(|e| StrawberryError::Serialization(e.to_string()))
}
