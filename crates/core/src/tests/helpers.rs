// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CommandOutput, Deployment, ReleaseOrdinal, ReleaseResolver, RemoteError, Unit};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

/// In-memory deployment answering `stat` with canned responses per unit.
#[derive(Default)]
pub struct FakeDeployment {
    applications: BTreeMap<String, Vec<String>>,
    responses: BTreeMap<String, Result<CommandOutput, RemoteError>>,
    commands: RefCell<Vec<(String, String)>>,
    fail_listing: bool,
}

impl FakeDeployment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a unit whose `stat` prints `stdout`.
    pub fn with_unit(self, application: &str, unit: &str, stdout: &str) -> Self {
        self.with_response(application, unit, Ok(CommandOutput::ok(stdout)))
    }

    pub fn with_response(
        mut self,
        application: &str,
        unit: &str,
        response: Result<CommandOutput, RemoteError>,
    ) -> Self {
        self.applications
            .entry(application.to_string())
            .or_default()
            .push(unit.to_string());
        self.responses.insert(unit.to_string(), response);
        self
    }

    /// Adds an application without any unit.
    pub fn with_application(mut self, application: &str) -> Self {
        self.applications.entry(application.to_string()).or_default();
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Every `(unit, command)` pair issued so far.
    pub fn commands(&self) -> Vec<(String, String)> {
        self.commands.borrow().clone()
    }
}

impl Deployment for FakeDeployment {
    fn deployed_applications(&self) -> Result<BTreeSet<String>, RemoteError> {
        if self.fail_listing {
            return Err(RemoteError::Spawn {
                command: String::from("juju status --format=json"),
                reason: String::from("connection refused"),
            });
        }
        Ok(self.applications.keys().cloned().collect())
    }

    fn units(&self, application: &str) -> Result<Vec<Unit>, RemoteError> {
        self.applications
            .get(application)
            .map(|units| units.iter().map(Unit::new).collect())
            .ok_or_else(|| RemoteError::ApplicationNotFound(application.to_string()))
    }

    fn run_on_unit(&self, entity_id: &str, command: &str) -> Result<CommandOutput, RemoteError> {
        self.commands
            .borrow_mut()
            .push((entity_id.to_string(), command.to_string()));
        self.responses
            .get(entity_id)
            .cloned()
            .unwrap_or_else(|| Err(RemoteError::ApplicationNotFound(entity_id.to_string())))
    }
}

/// Resolver over a fixed ordered list of release names.
pub struct FakeReleases {
    current_pair: String,
    order: Vec<&'static str>,
    lookups: Cell<usize>,
}

impl FakeReleases {
    pub fn at(current_pair: &str) -> Self {
        Self {
            current_pair: current_pair.to_string(),
            order: vec!["mitaka", "queens", "rocky", "stein", "train", "ussuri"],
            lookups: Cell::new(0),
        }
    }

    /// Number of `current_release_pair` calls made.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl ReleaseResolver for FakeReleases {
    fn current_release_pair(&self, _application: &str) -> Result<String, RemoteError> {
        self.lookups.set(self.lookups.get() + 1);
        Ok(self.current_pair.clone())
    }

    fn release_ordinal(&self, release: &str) -> Result<ReleaseOrdinal, RemoteError> {
        self.order
            .iter()
            .position(|name| *name == release)
            .map(ReleaseOrdinal::new)
            .ok_or_else(|| RemoteError::UnknownRelease(release.to_string()))
    }
}
