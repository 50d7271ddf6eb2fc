// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptor generation and validation.
//!
//! Each supported platform has a module that decides whether the
//! configuration targets it, validates the platform's rules and renders its
//! manifest (`plugin.yml` for Paper, `velocity-plugin.json` for Velocity).
//! The registry selects the applicable platforms and the task module runs
//! them: every platform is validated before any file is written.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let config = strawberry_config::load_and_validate().expect("config errors");
//! strawberry_descriptor::generate_descriptors(&config, Path::new("target/generated"))
//!     .expect("plugin description is invalid");
//! ```

pub mod paper;
pub mod registry;
pub mod rules;
pub mod task;
pub mod velocity;
pub mod yaml;

pub use registry::{applicable_generators, DescriptorGenerator, PlatformDescriptor, PLATFORMS};
pub use task::{generate_all, generate_descriptors, validate_all};
