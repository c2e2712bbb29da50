// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::deployment::RemoteError;
use unitstat_domain::DomainError;

/// Errors that stop a suite before any test runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The assertion configuration is invalid.
    DomainViolation(DomainError),
    /// The deployment could not be queried.
    Deployment(RemoteError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Deployment(err) => write!(f, "Deployment query failed: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            Self::Deployment(err) => Some(err),
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<RemoteError> for CoreError {
    fn from(err: RemoteError) -> Self {
        Self::Deployment(err)
    }
}
