// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Owner expected when an assertion does not declare one.
pub const DEFAULT_OWNER: &str = "root";

/// Group expected when an assertion does not declare one.
pub const DEFAULT_GROUP: &str = "root";

/// Mode expected when an assertion does not declare one.
pub const DEFAULT_MODE: &str = "600";

fn default_owner() -> String {
    String::from(DEFAULT_OWNER)
}

fn default_group() -> String {
    String::from(DEFAULT_GROUP)
}

fn default_mode() -> String {
    String::from(DEFAULT_MODE)
}

/// Modes must be quoted. YAML reads `0o640` as the integer 416, which is
/// indistinguishable from a decimal `416` once parsed.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMode {
    Text(String),
    Number(i64),
}

fn deserialize_mode<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match RawMode::deserialize(deserializer)? {
        RawMode::Text(text) => Ok(text),
        RawMode::Number(number) => Err(serde::de::Error::custom(format!(
            "mode must be a quoted string such as \"640\", found the integer {number}"
        ))),
    }
}

/// Expected ownership and permission bits for a single path.
///
/// Immutable once loaded from configuration. `since` and `until` bound the
/// releases in which the assertion is expected to hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileAssertionSpec {
    /// Absolute path on the unit.
    pub path: String,
    /// Expected owning user.
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Expected owning group.
    #[serde(default = "default_group")]
    pub group: String,
    /// Expected octal permission bits, as `stat %a` prints them.
    #[serde(default = "default_mode", deserialize_with = "deserialize_mode")]
    pub mode: String,
    /// Release after which the assertion applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// Release from which the assertion no longer applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

impl FileAssertionSpec {
    /// Creates an assertion for `path` with the default root/root/600 expectations.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            owner: default_owner(),
            group: default_group(),
            mode: default_mode(),
            since: None,
            until: None,
        }
    }

    /// Sets the expected owner.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Sets the expected group.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the expected mode.
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Sets the release after which the assertion applies.
    #[must_use]
    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Sets the release from which the assertion no longer applies.
    #[must_use]
    pub fn with_until(mut self, until: impl Into<String>) -> Self {
        self.until = Some(until.into());
        self
    }

    /// The `since` release, ignoring an empty value.
    #[must_use]
    pub fn since_release(&self) -> Option<&str> {
        self.since.as_deref().filter(|since| !since.is_empty())
    }

    /// The `until` release, ignoring an empty value.
    #[must_use]
    pub fn until_release(&self) -> Option<&str> {
        self.until.as_deref().filter(|until| !until.is_empty())
    }

    /// Whether the assertion is scoped to a release window.
    #[must_use]
    pub fn has_release_window(&self) -> bool {
        self.since_release().is_some() || self.until_release().is_some()
    }
}

/// The assertions declared for one application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationFiles {
    /// Assertions in declaration order.
    pub files: Vec<FileAssertionSpec>,
}

/// Mapping from application name to its declared file assertions.
///
/// Loaded once per run and read-only thereafter. Applications iterate in
/// name order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationFileSet {
    applications: BTreeMap<String, ApplicationFiles>,
}

impl ApplicationFileSet {
    /// Creates an empty file set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            applications: BTreeMap::new(),
        }
    }

    /// Appends an assertion to an application's list.
    pub fn insert(&mut self, application: impl Into<String>, spec: FileAssertionSpec) {
        self.applications
            .entry(application.into())
            .or_default()
            .files
            .push(spec);
    }

    /// Iterates applications and their assertions in name order.
    pub fn applications(&self) -> impl Iterator<Item = (&str, &[FileAssertionSpec])> {
        self.applications
            .iter()
            .map(|(name, files)| (name.as_str(), files.files.as_slice()))
    }

    /// Returns the assertions for one application.
    #[must_use]
    pub fn files_for(&self, application: &str) -> Option<&[FileAssertionSpec]> {
        self.applications
            .get(application)
            .map(|files| files.files.as_slice())
    }

    /// Number of applications with declared assertions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.applications.len()
    }

    /// Whether no application declares any assertion.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    /// Total number of assertions across every application.
    #[must_use]
    pub fn assertion_count(&self) -> usize {
        self.applications.values().map(|files| files.files.len()).sum()
    }
}
