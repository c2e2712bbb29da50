// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::deployment::{Deployment, ReleaseResolver};
use crate::generate::GeneratedTest;
use crate::outcome::TestOutcome;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Outcome of one generated test as recorded by the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    /// The generated test name.
    pub name: String,
    /// The application whose units were checked.
    pub application: String,
    /// The terminal outcome.
    pub outcome: TestOutcome,
    /// Wall-clock time spent in the test, in milliseconds.
    pub elapsed_ms: u64,
}

/// Results of a suite run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    passed: usize,
    skipped: usize,
    failed: usize,
    results: Vec<TestResult>,
}

impl SuiteReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            passed: 0,
            skipped: 0,
            failed: 0,
            results: Vec::new(),
        }
    }

    /// Records a result and updates the counts.
    pub fn record(&mut self, result: TestResult) {
        match result.outcome {
            TestOutcome::Passed => self.passed += 1,
            TestOutcome::Skipped(_) => self.skipped += 1,
            TestOutcome::Failed(_) => self.failed += 1,
        }
        self.results.push(result);
    }

    /// Number of passed tests.
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Number of skipped tests.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of failed tests.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// All results in execution order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Whether no test failed. Skips do not count as failures.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// One-line summary of the counts.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} test(s): {} passed, {} skipped, {} failed",
            self.results.len(),
            self.passed,
            self.skipped,
            self.failed
        )
    }

    /// Pretty JSON rendering of the report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs each test once, sequentially, and collects the outcomes.
///
/// A failing test never stops the suite; its siblings still run.
pub fn run_suite(
    tests: &[GeneratedTest],
    deployment: &dyn Deployment,
    releases: &dyn ReleaseResolver,
) -> SuiteReport {
    let mut report: SuiteReport = SuiteReport::new();

    for test in tests {
        tracing::debug!("running {}", test.name());
        let started: Instant = Instant::now();
        let outcome: TestOutcome = test.run(deployment, releases);
        let elapsed: Duration = started.elapsed();

        tracing::debug!("{} ... {outcome} ({elapsed:?})", test.name());

        report.record(TestResult {
            name: test.name().to_string(),
            application: test.application().to_string(),
            outcome,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        });
    }

    report
}
