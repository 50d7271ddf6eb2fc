// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for descriptor validation and generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Platform;

/// The primary error type returned by validation and generation.
#[derive(Debug, Error)]
pub enum StrawberryError {
    /// A platform rule rejected the plugin description.
    #[error("invalid {platform} plugin description: {field} {message}")]
    InvalidDescription {
        platform: Platform,
        field: String,
        message: String,
    },

    /// The output directory or a manifest file could not be created or written.
    #[error("i/o error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest document could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StrawberryError {
    /// Shorthand for an [`StrawberryError::InvalidDescription`].
    pub fn invalid(platform: Platform, field: &str, message: impl Into<String>) -> Self {
        Self::InvalidDescription {
            platform,
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Returns true if this error came from a validation rule.
    pub fn is_invalid_description(&self) -> bool {
        matches!(self, Self::InvalidDescription { .. })
    }
}
