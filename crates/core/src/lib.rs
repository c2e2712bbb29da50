// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data-driven file assertion tests.
//!
//! A configuration of expected file metadata per application is turned into
//! an explicit list of [`GeneratedTest`] records, one per (application, file)
//! pair of every deployed application. Each record runs against all live
//! units of its application and returns a [`TestOutcome`] value instead of
//! panicking or unwinding.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod deployment;
mod error;
mod execute;
mod generate;
mod outcome;
mod runner;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use unitstat_domain::ApplicationFileSet;

pub use deployment::{
    CommandOutput, Deployment, ReleaseOrdinal, ReleaseResolver, RemoteError, Unit, release_token,
};
pub use error::CoreError;
pub use generate::{GeneratedTest, filter_tests, generate};
pub use outcome::{Failure, TestOutcome};
pub use runner::{SuiteReport, TestResult, run_suite};

/// Queries the deployment for its applications and generates the tests for
/// those that are deployed.
///
/// # Arguments
///
/// * `config` - The loaded file assertions
/// * `deployment` - The live deployment
///
/// # Errors
///
/// Returns an error if:
/// - The deployed applications cannot be listed
/// - Two assertions generate the same test name
pub fn discover_tests(
    config: &ApplicationFileSet,
    deployment: &dyn Deployment,
) -> Result<Vec<GeneratedTest>, CoreError> {
    let deployed: BTreeSet<String> = deployment.deployed_applications()?;
    tracing::debug!(
        "deployment reports {} application(s): {:?}",
        deployed.len(),
        deployed
    );
    generate(config, &deployed)
}
