// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Juju-backed collaborators for unitstat.
//!
//! [`JujuClient`] implements [`unitstat::Deployment`] by shelling out to the
//! `juju` CLI. [`OpenStackReleases`] implements [`unitstat::ReleaseResolver`]
//! over the OpenStack release order, reading the running release from the
//! application's `openstack-origin` (or `source`) setting.

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

mod client;
mod release;
mod status;

#[cfg(test)]
mod tests;

pub use client::JujuClient;
pub use release::{
    OPENSTACK_RELEASES, OpenStackReleases, distro_release, openstack_ordinal, release_from_origin,
};
pub use status::{
    ApplicationConfig, ApplicationStatus, Base, JujuStatus, Setting, UnitStatus, series_for_base,
};
