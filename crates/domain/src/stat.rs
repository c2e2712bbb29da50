// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::FileAssertionSpec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// `stat` format printing owning user, owning group and octal mode.
const STAT_FORMAT: &str = "%U %G %a";

/// Builds the remote command reporting the stat triple of `path`.
///
/// Paths made only of shell-safe characters are passed through untouched;
/// anything else is single-quoted.
#[must_use]
pub fn stat_command(path: &str) -> String {
    format!("stat -c \"{STAT_FORMAT}\" {}", shell_quote(path))
}

fn shell_quote(path: &str) -> String {
    let safe: bool = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+:@%,=".contains(c));
    if safe {
        path.to_string()
    } else {
        format!("'{}'", path.replace('\'', r"'\''"))
    }
}

/// One of the three fields compared by a file assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatField {
    /// Owning user.
    Owner,
    /// Owning group.
    Group,
    /// Octal permission bits.
    Mode,
}

impl StatField {
    /// Capitalized field name used in failure messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Group => "Group",
            Self::Mode => "Mode",
        }
    }
}

impl std::fmt::Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owner, group and mode of a path as reported by `stat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTriple {
    /// Owning user.
    pub owner: String,
    /// Owning group.
    pub group: String,
    /// Octal permission bits without a leading zero.
    pub mode: String,
}

impl StatTriple {
    /// Returns the observed value of a field.
    #[must_use]
    pub fn field(&self, field: StatField) -> &str {
        match field {
            StatField::Owner => &self.owner,
            StatField::Group => &self.group,
            StatField::Mode => &self.mode,
        }
    }

    /// Finds the first field, in owner/group/mode order, that differs from
    /// the assertion.
    #[must_use]
    pub fn first_mismatch(&self, expected: &FileAssertionSpec) -> Option<StatField> {
        [StatField::Owner, StatField::Group, StatField::Mode]
            .into_iter()
            .find(|field| self.field(*field) != expected.expected(*field))
    }
}

impl FileAssertionSpec {
    /// Returns the expected value of a field.
    #[must_use]
    pub fn expected(&self, field: StatField) -> &str {
        match field {
            StatField::Owner => &self.owner,
            StatField::Group => &self.group,
            StatField::Mode => &self.mode,
        }
    }
}

impl FromStr for StatTriple {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [owner, group, mode] => Ok(Self {
                owner: (*owner).to_string(),
                group: (*group).to_string(),
                mode: (*mode).to_string(),
            }),
            _ => Err(DomainError::MalformedStatOutput(s.to_string())),
        }
    }
}
