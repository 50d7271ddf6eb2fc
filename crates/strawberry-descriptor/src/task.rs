// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The descriptor generation step: select, validate everything, then write.
//!
//! Generation is all-or-nothing with respect to validation: no manifest is
//! written unless every applicable platform validates.

use std::path::{Path, PathBuf};

use strawberry_config::{ProjectConfig, StrawberryConfig};
use strawberry_core::Result;
use tracing::{info, warn};

use crate::registry::{applicable_generators, DescriptorGenerator};

/// Validate every generator, stopping at the first failure.
pub fn validate_all(generators: &[DescriptorGenerator<'_>]) -> Result<()> {
    for generator in generators {
        if let Err(e) = generator.validate() {
            warn!(platform = %generator.platform(), error = %e, "plugin description rejected");
            return Err(e);
        }
    }
    Ok(())
}

/// Write every generator's manifest into `directory`.
///
/// Callers run [`validate_all`] first; [`generate_descriptors`] does both.
pub fn generate_all(
    generators: &[DescriptorGenerator<'_>],
    project: &ProjectConfig,
    directory: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(generators.len());
    for generator in generators {
        let path = generator.generate(project, directory)?;
        info!(platform = %generator.platform(), path = %path.display(), "wrote plugin descriptor");
        written.push(path);
    }
    Ok(written)
}

/// Select the applicable platforms, validate them all, then write each
/// manifest into `directory`. Returns the written paths.
pub fn generate_descriptors(config: &StrawberryConfig, directory: &Path) -> Result<Vec<PathBuf>> {
    let generators = applicable_generators(config);
    if generators.is_empty() {
        info!("no platform configured; nothing to generate");
        return Ok(Vec::new());
    }

    validate_all(&generators)?;
    generate_all(&generators, &config.project, directory)
}
