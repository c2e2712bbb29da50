// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contracts for the live deployment and the release resolver.
//!
//! Both collaborators are blocking and carry no retry policy. Whatever
//! timeout the implementation enforces is inherited as-is.

use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised while talking to the deployment or resolving releases.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// The command could not be started or did not complete.
    #[error("Failed to run `{command}`: {reason}")]
    Spawn { command: String, reason: String },

    /// A command run on a unit exited unsuccessfully.
    #[error("`{command}` exited with code {code} on {unit}: {stderr}")]
    CommandFailed {
        unit: String,
        command: String,
        code: i32,
        stderr: String,
    },

    /// A unit answered with output that could not be interpreted.
    #[error("Unparseable output from {unit}: {reason}")]
    UnparseableOutput { unit: String, reason: String },

    /// A deployment query ran but reported failure.
    #[error("`{command}` failed: {reason}")]
    QueryFailed { command: String, reason: String },

    /// Deployment metadata could not be decoded.
    #[error("Failed to decode {what}: {reason}")]
    Decode { what: String, reason: String },

    /// The application is not part of the deployment.
    #[error("Application '{0}' is not deployed")]
    ApplicationNotFound(String),

    /// The release name has no known position.
    #[error("Unknown release '{0}'")]
    UnknownRelease(String),
}

/// A running instance of an application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit {
    entity_id: String,
}

impl Unit {
    /// Creates a unit from its entity identifier (`keystone/0`).
    #[must_use]
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
        }
    }

    /// Returns the entity identifier.
    #[must_use]
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }
}

/// Captured result of a command run on a unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
    /// Exit code. Signals are reported as `-1`.
    pub code: i32,
}

impl CommandOutput {
    /// A successful result carrying `stdout`.
    #[must_use]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            code: 0,
        }
    }

    /// Whether the command exited with code zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.code == 0
    }
}

/// Position of a release in the resolver's total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseOrdinal(usize);

impl ReleaseOrdinal {
    /// Creates an ordinal from its position.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the position.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

/// The live deployment queried and acted on by generated tests.
pub trait Deployment {
    /// Names of the applications currently deployed.
    ///
    /// # Errors
    ///
    /// Returns an error if the deployment cannot be queried.
    fn deployed_applications(&self) -> Result<BTreeSet<String>, RemoteError>;

    /// Units of an application, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deployment cannot be queried or the
    /// application does not exist.
    fn units(&self, application: &str) -> Result<Vec<Unit>, RemoteError>;

    /// Runs a shell command on a unit.
    ///
    /// A non-zero exit is not an error here; it is reported through
    /// [`CommandOutput::code`].
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be dispatched.
    fn run_on_unit(&self, entity_id: &str, command: &str) -> Result<CommandOutput, RemoteError>;
}

/// Resolves the release an application runs and orders release names.
pub trait ReleaseResolver {
    /// Composite release identifier of an application (`focal_ussuri`).
    ///
    /// # Errors
    ///
    /// Returns an error if the release cannot be determined.
    fn current_release_pair(&self, application: &str) -> Result<String, RemoteError>;

    /// Position of a release name in the release order.
    ///
    /// # Errors
    ///
    /// Returns an error if the release is unknown.
    fn release_ordinal(&self, release: &str) -> Result<ReleaseOrdinal, RemoteError>;
}

/// Extracts the trailing release token from a composite identifier.
///
/// `focal_ussuri` yields `ussuri`; an identifier without `_` is returned
/// unchanged.
#[must_use]
pub fn release_token(pair: &str) -> &str {
    pair.rsplit('_').next().unwrap_or(pair)
}
