// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::{ApplicationConfig, JujuStatus};
use duct::cmd;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io;
use std::process::Output;
use std::rc::Rc;
use unitstat::{CommandOutput, Deployment, RemoteError, Unit};

/// Deployment client driving the `juju` CLI.
///
/// Every call spawns a `juju` process and blocks until it exits. No timeout
/// or retry is layered on top of the CLI's own behaviour.
///
/// `juju status` is fetched once per client and the snapshot answers every
/// later application, unit and series lookup.
#[derive(Debug, Clone, Default)]
pub struct JujuClient {
    model: Option<String>,
    snapshot: RefCell<Option<Rc<JujuStatus>>>,
}

impl JujuClient {
    /// Creates a client for `model`, or the current model when `None`.
    #[must_use]
    pub const fn new(model: Option<String>) -> Self {
        Self {
            model,
            snapshot: RefCell::new(None),
        }
    }

    /// Seeds the status snapshot instead of querying `juju status`.
    #[must_use]
    pub fn with_snapshot(self, status: JujuStatus) -> Self {
        self.snapshot.replace(Some(Rc::new(status)));
        self
    }

    /// The model this client is scoped to.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Builds the argument list for a `juju` subcommand.
    #[must_use]
    pub fn args(&self, subcommand: &str, rest: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = vec![subcommand.to_string()];
        if let Some(model) = &self.model {
            args.push(String::from("-m"));
            args.push(model.clone());
        }
        args.extend(rest.iter().map(ToString::to_string));
        args
    }

    /// Runs a `juju` subcommand and captures its output.
    fn juju(&self, subcommand: &str, rest: &[&str]) -> Result<Output, RemoteError> {
        let args: Vec<String> = self.args(subcommand, rest);
        cmd("juju", &args)
            .run_with_trace()
            .map_err(|err| RemoteError::Spawn {
                command: format!("juju {}", args.join(" ")),
                reason: err.to_string(),
            })
    }

    /// Runs a read-only query, failing on a non-zero exit.
    fn query(&self, subcommand: &str, rest: &[&str]) -> Result<Vec<u8>, RemoteError> {
        let output: Output = self.juju(subcommand, rest)?;
        if !output.status.success() {
            return Err(RemoteError::QueryFailed {
                command: format!("juju {}", self.args(subcommand, rest).join(" ")),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }

    /// Fetches the model status.
    ///
    /// # Errors
    ///
    /// Returns an error if `juju status` cannot run, fails, or prints
    /// something other than status JSON.
    pub fn status(&self) -> Result<JujuStatus, RemoteError> {
        JujuStatus::from_json(&self.query("status", &["--format=json"])?)
    }

    /// The cached model status, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the first `juju status` query fails.
    pub fn snapshot(&self) -> Result<Rc<JujuStatus>, RemoteError> {
        if let Some(status) = self.snapshot.borrow().as_ref() {
            return Ok(Rc::clone(status));
        }
        let status: Rc<JujuStatus> = Rc::new(self.status()?);
        tracing::debug!(
            "cached juju status with {} application(s)",
            status.applications.len()
        );
        self.snapshot.replace(Some(Rc::clone(&status)));
        Ok(status)
    }

    /// Fetches an application's charm settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `juju config` cannot run, fails, or prints
    /// something other than config JSON.
    pub fn application_config(&self, application: &str) -> Result<ApplicationConfig, RemoteError> {
        ApplicationConfig::from_json(&self.query("config", &[application, "--format=json"])?)
    }
}

impl Deployment for JujuClient {
    fn deployed_applications(&self) -> Result<BTreeSet<String>, RemoteError> {
        Ok(self.snapshot()?.applications.keys().cloned().collect())
    }

    fn units(&self, application: &str) -> Result<Vec<Unit>, RemoteError> {
        self.snapshot()?.units(application)
    }

    fn run_on_unit(&self, entity_id: &str, command: &str) -> Result<CommandOutput, RemoteError> {
        let output: Output = self.juju("exec", &["--unit", entity_id, "--", command])?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code().unwrap_or(-1),
        })
    }
}

trait ExpressionExt {
    /// Run the command with captured output and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::debug!("running command: {:?}", self);
        self.stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .inspect_err(|_| {
                tracing::error!("failed to run command: {:?}", self);
            })
    }
}
