// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed views of `juju status --format=json` and `juju config --format=json`.
//!
//! Only the fields unitstat reads are modelled; everything else in the
//! documents is ignored.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use unitstat::{RemoteError, Unit};

/// Top-level `juju status` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JujuStatus {
    /// Deployed applications keyed by name.
    #[serde(default)]
    pub applications: BTreeMap<String, ApplicationStatus>,
}

/// Operating system base reported by Juju 3.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Base {
    /// Distribution name (`ubuntu`).
    pub name: String,
    /// Release channel (`22.04`).
    pub channel: String,
}

/// One application entry of `juju status`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApplicationStatus {
    /// Ubuntu series, reported by Juju 2.
    #[serde(default)]
    pub series: Option<String>,
    /// Operating system base, reported by Juju 3.
    #[serde(default)]
    pub base: Option<Base>,
    /// Principal applications this subordinate is attached to.
    #[serde(default)]
    pub subordinate_to: Vec<String>,
    /// Principal units keyed by entity id. Subordinates have none here; their
    /// units are nested under the principal units.
    #[serde(default)]
    pub units: BTreeMap<String, UnitStatus>,
}

/// One unit entry of `juju status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnitStatus {
    /// Subordinate units running alongside this unit, keyed by entity id.
    #[serde(default)]
    pub subordinates: BTreeMap<String, UnitStatus>,
}

impl JujuStatus {
    /// Parses a `juju status --format=json` document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid status JSON.
    pub fn from_json(bytes: &[u8]) -> Result<Self, RemoteError> {
        serde_json::from_slice(bytes).map_err(|err| RemoteError::Decode {
            what: String::from("juju status"),
            reason: err.to_string(),
        })
    }

    /// Looks up one application.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::ApplicationNotFound` if it is not deployed.
    pub fn application(&self, name: &str) -> Result<&ApplicationStatus, RemoteError> {
        self.applications
            .get(name)
            .ok_or_else(|| RemoteError::ApplicationNotFound(name.to_string()))
    }

    /// Every unit of an application, ordered by unit number.
    ///
    /// Units of a subordinate application are collected from the
    /// `subordinates` of each unit of its principals.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::ApplicationNotFound` if it is not deployed.
    pub fn units(&self, name: &str) -> Result<Vec<Unit>, RemoteError> {
        let application: &ApplicationStatus = self.application(name)?;
        if application.subordinate_to.is_empty() {
            return Ok(sorted(application.units.keys()));
        }

        let prefix: String = format!("{name}/");
        let ids: BTreeSet<&String> = application
            .subordinate_to
            .iter()
            .filter_map(|principal| self.applications.get(principal))
            .flat_map(|principal| principal.units.values())
            .flat_map(|unit| unit.subordinates.keys())
            .filter(|id| id.starts_with(&prefix))
            .collect();
        Ok(sorted(ids))
    }
}

impl ApplicationStatus {
    /// The Ubuntu series the application runs on.
    ///
    /// Juju 2 reports `series` directly; Juju 3 reports a `base` that is
    /// mapped back to its series name.
    #[must_use]
    pub fn series(&self) -> Option<String> {
        if let Some(series) = self.series.as_ref().filter(|s| !s.is_empty()) {
            return Some(series.clone());
        }
        self.base
            .as_ref()
            .and_then(|base| series_for_base(&base.channel))
            .map(ToString::to_string)
    }
}

/// Orders units by unit number, so `app/10` follows `app/9`.
fn sorted<'a>(ids: impl IntoIterator<Item = &'a String>) -> Vec<Unit> {
    let mut ids: Vec<&String> = ids.into_iter().collect();
    ids.sort_by_key(|id| unit_sort_key(id));
    ids.into_iter().map(Unit::new).collect()
}

fn unit_sort_key(id: &str) -> (String, u64) {
    match id.rsplit_once('/') {
        Some((application, number)) => (
            application.to_string(),
            number.parse::<u64>().unwrap_or(u64::MAX),
        ),
        None => (id.to_string(), u64::MAX),
    }
}

/// Maps an Ubuntu base channel (`22.04`, `22.04/stable`) to its series.
#[must_use]
pub fn series_for_base(channel: &str) -> Option<&'static str> {
    let version: &str = channel.split('/').next().unwrap_or(channel);
    match version {
        "14.04" => Some("trusty"),
        "16.04" => Some("xenial"),
        "18.04" => Some("bionic"),
        "20.04" => Some("focal"),
        "22.04" => Some("jammy"),
        "24.04" => Some("noble"),
        _ => None,
    }
}

/// Top-level `juju config <application> --format=json` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationConfig {
    /// Charm settings keyed by option name.
    #[serde(default)]
    pub settings: BTreeMap<String, Setting>,
}

/// One charm setting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Setting {
    /// The effective value, absent when unset without a default.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl ApplicationConfig {
    /// Parses a `juju config --format=json` document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid config JSON.
    pub fn from_json(bytes: &[u8]) -> Result<Self, RemoteError> {
        serde_json::from_slice(bytes).map_err(|err| RemoteError::Decode {
            what: String::from("juju config"),
            reason: err.to_string(),
        })
    }

    /// Returns a setting's value when it is a non-empty string.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.settings
            .get(key)
            .and_then(|setting| setting.value.as_ref())
            .and_then(serde_json::Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// The package origin: `openstack-origin`, falling back to `source`.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.string("openstack-origin")
            .or_else(|| self.string("source"))
    }
}
