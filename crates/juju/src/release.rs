// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! OpenStack release ordering and detection.
//!
//! ## Origins
//!
//! Charms install OpenStack from the origin in `openstack-origin` (or
//! `source` for charms without that option):
//!
//! - `distro` or unset: the release shipped with the series
//! - `cloud:focal-victoria`, `cloud:focal-victoria/proposed`: Ubuntu Cloud Archive
//! - `cloud:trusty-updates/kilo`: older Cloud Archive pocket spelling
//!
//! The current release is reported as a `series_codename` pair, matching the
//! identifiers used in release windows.

use crate::client::JujuClient;
use crate::status::{ApplicationConfig, JujuStatus};
use std::rc::Rc;
use unitstat::{ReleaseOrdinal, ReleaseResolver, RemoteError, release_token};

/// OpenStack codenames, oldest first.
pub static OPENSTACK_RELEASES: [&str; 24] = [
    "icehouse",
    "juno",
    "kilo",
    "liberty",
    "mitaka",
    "newton",
    "ocata",
    "pike",
    "queens",
    "rocky",
    "stein",
    "train",
    "ussuri",
    "victoria",
    "wallaby",
    "xena",
    "yoga",
    "zed",
    "antelope",
    "bobcat",
    "caracal",
    "dalmatian",
    "epoxy",
    "flamingo",
];

/// Numbered release names used since 2023.
static NUMBERED_RELEASES: [(&str, &str); 6] = [
    ("2023.1", "antelope"),
    ("2023.2", "bobcat"),
    ("2024.1", "caracal"),
    ("2024.2", "dalmatian"),
    ("2025.1", "epoxy"),
    ("2025.2", "flamingo"),
];

/// Position of an OpenStack release, by codename, numbered name, or
/// `series_codename` pair.
///
/// # Errors
///
/// Returns `RemoteError::UnknownRelease` for names outside the release table.
pub fn openstack_ordinal(release: &str) -> Result<ReleaseOrdinal, RemoteError> {
    let token: String = release_token(release).trim().to_ascii_lowercase();
    let codename: &str = NUMBERED_RELEASES
        .iter()
        .find(|(number, _)| *number == token)
        .map_or(token.as_str(), |(_, codename)| *codename);

    OPENSTACK_RELEASES
        .iter()
        .position(|name| *name == codename)
        .map(ReleaseOrdinal::new)
        .ok_or_else(|| RemoteError::UnknownRelease(release.to_string()))
}

/// The OpenStack release shipped in a series' main archive.
#[must_use]
pub fn distro_release(series: &str) -> Option<&'static str> {
    match series {
        "trusty" => Some("icehouse"),
        "xenial" => Some("mitaka"),
        "bionic" => Some("queens"),
        "focal" => Some("ussuri"),
        "jammy" => Some("yoga"),
        "noble" => Some("caracal"),
        _ => None,
    }
}

/// Determines the OpenStack codename installed from `origin` on `series`.
///
/// # Errors
///
/// Returns an error if the origin names no known release and the series has
/// no distro default.
pub fn release_from_origin(origin: Option<&str>, series: &str) -> Result<String, RemoteError> {
    let origin: &str = origin.map_or("distro", str::trim);

    if let Some(pocket) = origin.strip_prefix("cloud:") {
        let codename: Option<&str> = pocket
            .split(['-', '/'])
            .find(|part| OPENSTACK_RELEASES.contains(part));
        if let Some(codename) = codename {
            return Ok(codename.to_string());
        }
        return Err(RemoteError::UnknownRelease(origin.to_string()));
    }

    distro_release(series)
        .map(ToString::to_string)
        .ok_or_else(|| RemoteError::UnknownRelease(format!("{origin} on {series}")))
}

/// Release resolver for OpenStack applications in a Juju model.
pub struct OpenStackReleases<'a> {
    client: &'a JujuClient,
}

impl<'a> OpenStackReleases<'a> {
    /// Creates a resolver reading status and config through `client`.
    #[must_use]
    pub const fn new(client: &'a JujuClient) -> Self {
        Self { client }
    }
}

impl ReleaseResolver for OpenStackReleases<'_> {
    fn current_release_pair(&self, application: &str) -> Result<String, RemoteError> {
        let status: Rc<JujuStatus> = self.client.snapshot()?;
        let series: String = status.application(application)?.series().ok_or_else(|| {
            RemoteError::Decode {
                what: format!("series of {application}"),
                reason: String::from("neither series nor a known base is reported"),
            }
        })?;

        let config: ApplicationConfig = self.client.application_config(application)?;
        let codename: String = release_from_origin(config.origin(), &series)?;
        tracing::debug!(
            "{application} runs {series}_{codename} (origin {})",
            config.origin().unwrap_or("distro")
        );
        Ok(format!("{series}_{codename}"))
    }

    fn release_ordinal(&self, release: &str) -> Result<ReleaseOrdinal, RemoteError> {
        openstack_ordinal(release)
    }
}
