// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use unitstat_domain::StatField;

/// Why a generated test failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    /// A unit reported a value different from the assertion.
    Mismatch {
        /// The unit that was checked.
        unit: String,
        /// The first field that differed.
        field: StatField,
        /// The asserted value.
        expected: String,
        /// The observed value.
        actual: String,
    },
    /// The deployment or the release resolver could not answer.
    Remote {
        /// The unit being checked, if the error was unit-specific.
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        /// The error message.
        message: String,
    },
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mismatch {
                unit,
                field,
                expected,
                actual,
            } => write!(
                f,
                "{field} is incorrect for {unit}: {actual} (expected {expected})"
            ),
            Self::Remote {
                unit: Some(unit),
                message,
            } => write!(f, "{unit}: {message}"),
            Self::Remote {
                unit: None,
                message,
            } => write!(f, "{message}"),
        }
    }
}

/// Terminal result of a generated test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum TestOutcome {
    /// Every unit matched the assertion.
    Passed,
    /// The release window excludes the current deployment.
    Skipped(String),
    /// A unit mismatched, or the deployment could not be queried.
    Failed(Failure),
}

impl TestOutcome {
    /// Whether the test passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Whether the test was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// Whether the test failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl std::fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "ok"),
            Self::Skipped(reason) => write!(f, "skipped: {reason}"),
            Self::Failed(failure) => write!(f, "FAILED: {failure}"),
        }
    }
}
