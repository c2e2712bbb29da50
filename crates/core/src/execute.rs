// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The per-unit assertion body of a generated test.
//!
//! ## Order of checks
//!
//! 1. Release window: `until` first, then `since`. A window that excludes the
//!    current release skips the test before any unit is contacted.
//! 2. Every unit of the application, in the order the deployment lists them.
//! 3. Per unit: owner, then group, then mode. The first mismatch ends the test.

use crate::deployment::{
    CommandOutput, Deployment, ReleaseOrdinal, ReleaseResolver, RemoteError, Unit, release_token,
};
use crate::generate::GeneratedTest;
use crate::outcome::{Failure, TestOutcome};
use unitstat_domain::{FileAssertionSpec, StatField, StatTriple, stat_command};

impl GeneratedTest {
    /// Runs the assertion against every unit of the application.
    ///
    /// Never panics on remote failures: errors from the deployment or the
    /// resolver become [`TestOutcome::Failed`] for this test only.
    pub fn run(&self, deployment: &dyn Deployment, releases: &dyn ReleaseResolver) -> TestOutcome {
        match self.release_window_skip(releases) {
            Ok(Some(reason)) => return TestOutcome::Skipped(reason),
            Ok(None) => {}
            Err(err) => {
                return TestOutcome::Failed(Failure::Remote {
                    unit: None,
                    message: err.to_string(),
                });
            }
        }

        let units: Vec<Unit> = match deployment.units(self.application()) {
            Ok(units) => units,
            Err(err) => {
                return TestOutcome::Failed(Failure::Remote {
                    unit: None,
                    message: err.to_string(),
                });
            }
        };

        if units.is_empty() {
            tracing::warn!(
                "{}: application {} has no units, nothing to check",
                self.name(),
                self.application()
            );
        }

        for unit in &units {
            if let Err(failure) = self.check_unit(deployment, unit) {
                return TestOutcome::Failed(failure);
            }
        }

        TestOutcome::Passed
    }

    /// Returns a skip reason when the release window excludes the current
    /// release, or `None` when the assertion applies.
    fn release_window_skip(
        &self,
        releases: &dyn ReleaseResolver,
    ) -> Result<Option<String>, RemoteError> {
        let spec: &FileAssertionSpec = self.spec();
        if !spec.has_release_window() {
            return Ok(None);
        }

        let pair: String = releases.current_release_pair(self.application())?;
        let release: &str = release_token(&pair);
        let current: ReleaseOrdinal = releases.release_ordinal(release)?;
        tracing::debug!(
            "{}: current release of {} is {release} ({pair})",
            self.name(),
            self.application()
        );

        if let Some(until) = spec.until_release()
            && current >= releases.release_ordinal(until)?
        {
            return Ok(Some(format!(
                "'{until}' is not after current release '{release}'"
            )));
        }

        if let Some(since) = spec.since_release()
            && current <= releases.release_ordinal(since)?
        {
            return Ok(Some(format!(
                "'{since}' is not before current release '{release}'"
            )));
        }

        Ok(None)
    }

    /// Stats the path on one unit and compares the triple.
    fn check_unit(&self, deployment: &dyn Deployment, unit: &Unit) -> Result<(), Failure> {
        let entity_id: &str = unit.entity_id();
        let command: String = stat_command(&self.spec().path);
        let remote = |err: RemoteError| Failure::Remote {
            unit: Some(entity_id.to_string()),
            message: err.to_string(),
        };

        let output: CommandOutput = deployment
            .run_on_unit(entity_id, &command)
            .map_err(remote)?;
        if !output.success() {
            return Err(remote(RemoteError::CommandFailed {
                unit: entity_id.to_string(),
                command,
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            }));
        }

        let triple: StatTriple = output.stdout.parse().map_err(|err| {
            remote(RemoteError::UnparseableOutput {
                unit: entity_id.to_string(),
                reason: format!("{err}"),
            })
        })?;

        if let Some(field) = triple.first_mismatch(self.spec()) {
            return Err(self.mismatch(entity_id, field, &triple));
        }

        tracing::debug!(
            "{}: {entity_id} has {} {} {}",
            self.name(),
            triple.owner,
            triple.group,
            triple.mode
        );
        Ok(())
    }

    fn mismatch(&self, unit: &str, field: StatField, triple: &StatTriple) -> Failure {
        Failure::Mismatch {
            unit: unit.to_string(),
            field,
            expected: self.spec().expected(field).to_string(),
            actual: triple.field(field).to_string(),
        }
    }
}
