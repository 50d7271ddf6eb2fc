// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Strawberry.
//!
//! This crate provides the error type and the shared plugin description
//! types used by the configuration and descriptor crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::StrawberryError;
pub use types::{Authors, Dependencies, Dependency, LoadOrder, Platform};

/// Result alias used across the workspace.
pub type Result<T, E = StrawberryError> = std::result::Result<T, E>;
