// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Paper `plugin.yml` generation.

use strawberry_config::{PaperConfig, ProjectConfig};
use strawberry_core::{Platform, Result};

use crate::rules;
use crate::yaml::YamlDocument;

/// Manifest file name read by the Paper server.
pub const FILE_NAME: &str = "plugin.yml";

/// Paper is targeted once both `name` and `main` are set.
pub fn is_applicable(paper: &PaperConfig) -> bool {
    rules::is_present(paper.name.as_deref()) && rules::is_present(paper.main.as_deref())
}

pub fn validate(paper: &PaperConfig) -> Result<()> {
    rules::check_main_namespace(Platform::Paper, paper.main.as_deref().unwrap_or_default())?;
    rules::check_paper_name(paper.name.as_deref().unwrap_or_default())
}

/// Build the ordered document. Values left unset in the Paper section fall
/// back to the project's.
pub fn document(paper: &PaperConfig, project: &ProjectConfig) -> YamlDocument {
    let mut doc = YamlDocument::new();

    doc.scalar("name", paper.name.as_deref().unwrap_or_default())
        .scalar("main", paper.main.as_deref().unwrap_or_default())
        .scalar(
            "version",
            paper.version.as_deref().unwrap_or(&project.version),
        );

    // A blank Paper description counts as unset and is not replaced by the
    // project's.
    let description = paper
        .description
        .as_deref()
        .or(project.description.as_deref());
    if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
        doc.scalar("description", description);
    }

    doc.scalar("load", paper.load.to_string());

    if let Some(api_version) = paper.api_version.as_deref() {
        doc.scalar("api-version", api_version);
    }

    match paper.authors.len() {
        0 => {}
        1 => {
            doc.scalar("author", paper.authors.iter().next().unwrap_or_default());
        }
        _ => {
            doc.sequence("authors", paper.authors.iter());
        }
    }

    let (depend, softdepend) = paper.dependencies.partition();
    if !depend.is_empty() {
        doc.sequence("depend", depend);
    }
    if !softdepend.is_empty() {
        doc.sequence("softdepend", softdepend);
    }

    doc
}

pub fn render(paper: &PaperConfig, project: &ProjectConfig) -> Result<String> {
    document(paper, project).render()
}
