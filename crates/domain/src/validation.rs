// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{ApplicationFileSet, FileAssertionSpec};

/// Validates a single file assertion.
///
/// # Arguments
///
/// * `application` - The application declaring the assertion
/// * `spec` - The assertion to validate
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty
/// - The mode is not a run of octal digits
/// - The mode has a leading zero (`stat %a` never prints one)
pub fn validate_file_assertion(
    application: &str,
    spec: &FileAssertionSpec,
) -> Result<(), DomainError> {
    if spec.path.trim().is_empty() {
        return Err(DomainError::EmptyPath {
            application: application.to_string(),
        });
    }

    let mode: &str = spec.mode.as_str();
    let octal: bool = !mode.is_empty() && mode.chars().all(|c| ('0'..='7').contains(&c));
    let leading_zero: bool = mode.len() > 1 && mode.starts_with('0');
    if !octal || leading_zero {
        return Err(DomainError::InvalidMode {
            application: application.to_string(),
            path: spec.path.clone(),
            mode: spec.mode.clone(),
        });
    }

    Ok(())
}

/// Validates every assertion in a file set, stopping at the first failure.
///
/// # Errors
///
/// Returns the first error reported by [`validate_file_assertion`].
pub fn validate_file_set(files: &ApplicationFileSet) -> Result<(), DomainError> {
    for (application, specs) in files.applications() {
        for spec in specs {
            validate_file_assertion(application, spec)?;
        }
    }
    Ok(())
}
