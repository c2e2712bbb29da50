// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use std::collections::{BTreeSet, HashSet};
use unitstat_domain::{ApplicationFileSet, DomainError, FileAssertionSpec, test_name};

/// A named file assertion bound to one application.
///
/// Created once at generation time and never mutated. The runner invokes
/// [`GeneratedTest::run`] exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTest {
    name: String,
    application: String,
    spec: FileAssertionSpec,
}

impl GeneratedTest {
    /// Binds an assertion to an application, deriving the test name.
    #[must_use]
    pub fn new(application: impl Into<String>, spec: FileAssertionSpec) -> Self {
        let application: String = application.into();
        Self {
            name: test_name(&application, &spec),
            application,
            spec,
        }
    }

    /// The unique test name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The application whose units are checked.
    #[must_use]
    pub fn application(&self) -> &str {
        &self.application
    }

    /// The assertion checked on each unit.
    #[must_use]
    pub const fn spec(&self) -> &FileAssertionSpec {
        &self.spec
    }
}

/// Generates one test per file assertion of every deployed application.
///
/// Applications absent from `deployed` contribute no tests and no error.
/// Tests are returned in application-name order, then declaration order.
///
/// # Arguments
///
/// * `config` - The loaded file assertions
/// * `deployed` - Names of the applications present in the deployment
///
/// # Errors
///
/// Returns `DomainError::DuplicateTestName` if two assertions of the same
/// application share path and release window.
pub fn generate(
    config: &ApplicationFileSet,
    deployed: &BTreeSet<String>,
) -> Result<Vec<GeneratedTest>, CoreError> {
    let mut tests: Vec<GeneratedTest> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (application, specs) in config.applications() {
        if !deployed.contains(application) {
            tracing::debug!(
                "skipping {} file assertion(s) for {application}: not deployed",
                specs.len()
            );
            continue;
        }

        for spec in specs {
            let test: GeneratedTest = GeneratedTest::new(application, spec.clone());
            if !seen.insert(test.name().to_string()) {
                return Err(DomainError::DuplicateTestName(test.name().to_string()).into());
            }
            tests.push(test);
        }
    }

    tracing::debug!("generated {} test(s)", tests.len());
    Ok(tests)
}

/// Keeps only the tests whose name contains `pattern`.
#[must_use]
pub fn filter_tests(tests: Vec<GeneratedTest>, pattern: &str) -> Vec<GeneratedTest> {
    tests
        .into_iter()
        .filter(|test| test.name().contains(pattern))
        .collect()
}
