// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading of the declarative file assertion document.
//!
//! The document is a YAML mapping from application name to a record with a
//! `files` sequence:
//!
//! ```yaml
//! keystone:
//!   files:
//!     - path: /etc/keystone/keystone.conf
//!       group: keystone
//!       mode: "640"
//!     - path: /etc/keystone/fernet-keys
//!       owner: keystone
//!       mode: "700"
//!       since: queens
//! ```
//!
//! Any malformed entry is a configuration error raised before a single test
//! is generated.

use crate::error::DomainError;
use crate::types::ApplicationFileSet;
use crate::validation::validate_file_set;
use std::path::Path;

/// Location of the assertion document relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./file-assertions.yaml";

/// Reads and validates the assertion document at `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The document does not match the assertion schema
/// - An assertion has an empty path or an impossible mode
pub fn load_file_assertions(path: &Path) -> Result<ApplicationFileSet, DomainError> {
    let content: String =
        std::fs::read_to_string(path).map_err(|err| DomainError::ConfigUnreadable {
            path: path.display().to_string(),
            error: err.to_string(),
        })?;
    load_from_str(&content)
}

/// Parses and validates an assertion document held in memory.
///
/// An empty document yields an empty file set.
///
/// # Errors
///
/// Returns an error if the document does not match the assertion schema or
/// fails validation.
pub fn load_from_str(content: &str) -> Result<ApplicationFileSet, DomainError> {
    if content.trim().is_empty() {
        return Ok(ApplicationFileSet::new());
    }

    let files: ApplicationFileSet =
        serde_yaml::from_str(content).map_err(|err| DomainError::ConfigMalformed {
            error: err.to_string(),
        })?;

    validate_file_set(&files)?;
    Ok(files)
}
