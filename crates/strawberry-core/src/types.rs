// SPDX-FileCopyrightText: 2026 Strawberry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared plugin description types.
//!
//! Dependencies and authors are unordered sets in the manifest formats, but
//! both are kept in insertion order here so that generated documents are
//! byte-identical across runs.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Target host platform of a generated manifest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Paper,
    Velocity,
}

/// Phase of server startup a Paper plugin loads during.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadOrder {
    #[serde(alias = "startup")]
    Startup,
    #[default]
    #[serde(alias = "postworld")]
    PostWorld,
}

/// A prerequisite plugin.
///
/// Two dependencies are equal when their identifiers are equal, regardless of
/// optionality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    id: String,
    #[serde(default)]
    optional: bool,
}

impl Dependency {
    pub fn new(id: impl Into<String>, optional: bool) -> Self {
        Self {
            id: id.into(),
            optional,
        }
    }

    /// A hard dependency: the plugin refuses to load without it.
    pub fn required(id: impl Into<String>) -> Self {
        Self::new(id, false)
    }

    /// A soft dependency: loaded first when present.
    pub fn optional(id: impl Into<String>) -> Self {
        Self::new(id, true)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl PartialEq for Dependency {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Dependency {}

impl Hash for Dependency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Insertion-ordered set of dependencies keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Dependency>", into = "Vec<Dependency>")]
pub struct Dependencies(Vec<Dependency>);

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dependency.
    ///
    /// An entry with the same identifier is replaced in place and returned, so
    /// the last write decides optionality.
    pub fn insert(&mut self, dependency: Dependency) -> Option<Dependency> {
        match self.0.iter_mut().find(|d| d.id == dependency.id) {
            Some(existing) => Some(std::mem::replace(existing, dependency)),
            None => {
                self.0.push(dependency);
                None
            }
        }
    }

    pub fn add(&mut self, id: impl Into<String>, optional: bool) -> &mut Self {
        self.insert(Dependency::new(id, optional));
        self
    }

    pub fn get(&self, id: &str) -> Option<&Dependency> {
        self.0.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dependency> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into `(hard, soft)` identifiers, each in set order.
    pub fn partition(&self) -> (Vec<&str>, Vec<&str>) {
        let (soft, hard): (Vec<&Dependency>, Vec<&Dependency>) =
            self.0.iter().partition(|d| d.optional);
        (
            hard.into_iter().map(Dependency::id).collect(),
            soft.into_iter().map(Dependency::id).collect(),
        )
    }
}

impl From<Vec<Dependency>> for Dependencies {
    fn from(list: Vec<Dependency>) -> Self {
        list.into_iter().collect()
    }
}

impl From<Dependencies> for Vec<Dependency> {
    fn from(set: Dependencies) -> Self {
        set.0
    }
}

impl FromIterator<Dependency> for Dependencies {
    fn from_iter<I: IntoIterator<Item = Dependency>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Dependency> for Dependencies {
    fn extend<I: IntoIterator<Item = Dependency>>(&mut self, iter: I) {
        for dependency in iter {
            self.insert(dependency);
        }
    }
}

impl<'a> IntoIterator for &'a Dependencies {
    type Item = &'a Dependency;
    type IntoIter = std::slice::Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Insertion-ordered set of author names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Authors(Vec<String>);

impl Authors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an author. Returns false if the name was already present.
    pub fn insert(&mut self, author: impl Into<String>) -> bool {
        let author = author.into();
        if self.0.contains(&author) {
            return false;
        }
        self.0.push(author);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Authors {
    fn from(list: Vec<String>) -> Self {
        list.into_iter().collect()
    }
}

impl From<Authors> for Vec<String> {
    fn from(set: Authors) -> Self {
        set.0
    }
}

impl<S: Into<String>> FromIterator<S> for Authors {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for author in iter {
            set.insert(author);
        }
        set
    }
}
