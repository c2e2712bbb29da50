// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod config;
mod error;
mod naming;
mod stat;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_CONFIG_PATH, load_file_assertions, load_from_str};
pub use error::DomainError;
pub use naming::test_name;
pub use stat::{StatField, StatTriple, stat_command};
pub use types::{
    ApplicationFileSet, ApplicationFiles, DEFAULT_GROUP, DEFAULT_MODE, DEFAULT_OWNER,
    FileAssertionSpec,
};
pub use validation::{validate_file_assertion, validate_file_set};
