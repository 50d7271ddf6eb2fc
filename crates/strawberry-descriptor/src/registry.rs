// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generator registry.
//!
//! Platforms are a fixed table of [`PlatformDescriptor`] entries, each pairing
//! an applicability predicate with a validator, a renderer and the manifest
//! file name. Adding a platform means adding a module and a table row.

use std::fs;
use std::path::{Path, PathBuf};

use strawberry_config::{ProjectConfig, StrawberryConfig};
use strawberry_core::{Platform, Result, StrawberryError};
use tracing::debug;

use crate::{paper, velocity};

/// How one target platform is detected, validated and rendered.
#[derive(Debug)]
pub struct PlatformDescriptor {
    pub platform: Platform,
    pub file_name: &'static str,
    is_applicable: fn(&StrawberryConfig) -> bool,
    validate: fn(&StrawberryConfig) -> Result<()>,
    render: fn(&StrawberryConfig, &ProjectConfig) -> Result<String>,
}

/// Every supported platform.
pub static PLATFORMS: [PlatformDescriptor; 2] = [
    PlatformDescriptor {
        platform: Platform::Paper,
        file_name: paper::FILE_NAME,
        is_applicable: |config| paper::is_applicable(&config.paper),
        validate: |config| paper::validate(&config.paper),
        render: |config, project| paper::render(&config.paper, project),
    },
    PlatformDescriptor {
        platform: Platform::Velocity,
        file_name: velocity::FILE_NAME,
        is_applicable: |config| velocity::is_applicable(&config.velocity),
        validate: |config| velocity::validate(&config.velocity),
        render: |config, project| velocity::render(&config.velocity, project),
    },
];

/// Look up the descriptor for a platform.
pub fn descriptor(platform: Platform) -> &'static PlatformDescriptor {
    match platform {
        Platform::Paper => &PLATFORMS[0],
        Platform::Velocity => &PLATFORMS[1],
    }
}

/// A platform generator bound to a configuration.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorGenerator<'a> {
    descriptor: &'static PlatformDescriptor,
    config: &'a StrawberryConfig,
}

impl<'a> DescriptorGenerator<'a> {
    pub fn new(platform: Platform, config: &'a StrawberryConfig) -> Self {
        Self {
            descriptor: descriptor(platform),
            config,
        }
    }

    pub fn platform(&self) -> Platform {
        self.descriptor.platform
    }

    pub fn file_name(&self) -> &'static str {
        self.descriptor.file_name
    }

    /// Check the platform's rules. Must succeed before [`Self::generate`].
    pub fn validate(&self) -> Result<()> {
        (self.descriptor.validate)(self.config)
    }

    /// Render the manifest without touching the filesystem.
    pub fn render(&self, project: &ProjectConfig) -> Result<String> {
        (self.descriptor.render)(self.config, project)
    }

    /// Render the manifest and write it into `directory`, creating the
    /// directory if needed. Returns the written path.
    pub fn generate(&self, project: &ProjectConfig, directory: &Path) -> Result<PathBuf> {
        let contents = self.render(project)?;

        fs::create_dir_all(directory).map_err(|source| StrawberryError::Io {
            path: directory.to_path_buf(),
            source,
        })?;

        let path = directory.join(self.file_name());
        fs::write(&path, contents).map_err(|source| StrawberryError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

impl PartialEq for DescriptorGenerator<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.platform() == other.platform()
    }
}

impl Eq for DescriptorGenerator<'_> {}

/// Return the generators whose platform has its identity fields set.
///
/// Each platform appears at most once, in [`PLATFORMS`] order. Platforms
/// without identity fields are skipped without error.
pub fn applicable_generators(config: &StrawberryConfig) -> Vec<DescriptorGenerator<'_>> {
    PLATFORMS
        .iter()
        .filter(|descriptor| {
            let applicable = (descriptor.is_applicable)(config);
            if applicable {
                debug!(platform = %descriptor.platform, "platform selected");
            } else {
                debug!(platform = %descriptor.platform, "platform skipped: identity fields not set");
            }
            applicable
        })
        .map(|descriptor| DescriptorGenerator { descriptor, config })
        .collect()
}
