// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for generating tests from a live deployment.

use super::helpers::{FakeDeployment, FakeReleases};
use crate::{CoreError, GeneratedTest, SuiteReport, TestOutcome, discover_tests, run_suite};
use unitstat_domain::{ApplicationFileSet, load_from_str};

const KEYSTONE_ONLY: &str = r#"
keystone:
  files:
    - path: /etc/keystone/keystone.conf
      mode: "640"
"#;

#[test]
fn test_discover_uses_deployed_applications() {
    let mut config: ApplicationFileSet = load_from_str(KEYSTONE_ONLY).unwrap();
    config.insert(
        "barbican",
        unitstat_domain::FileAssertionSpec::new("/etc/barbican/barbican.conf"),
    );
    let deployment: FakeDeployment = FakeDeployment::new()
        .with_unit("keystone", "keystone/0", "root root 640")
        .with_unit("mysql", "mysql/0", "root root 600");

    let tests: Vec<GeneratedTest> = discover_tests(&config, &deployment).unwrap();

    assert_eq!(tests.len(), 1);
    assert_eq!(tests[0].name(), "test_keystone_/etc/keystone/keystone.conf");
}

#[test]
fn test_discover_propagates_listing_failure() {
    let config: ApplicationFileSet = load_from_str(KEYSTONE_ONLY).unwrap();
    let deployment: FakeDeployment = FakeDeployment::new().failing_listing();

    let result: Result<Vec<GeneratedTest>, CoreError> = discover_tests(&config, &deployment);

    assert!(matches!(result, Err(CoreError::Deployment(_))));
}

#[test]
fn test_keystone_scenario_from_configuration() {
    let config: ApplicationFileSet = load_from_str(KEYSTONE_ONLY).unwrap();
    let deployment: FakeDeployment = FakeDeployment::new()
        .with_unit("keystone", "keystone/0", "root root 640")
        .with_unit("keystone", "keystone/1", "root root 600");

    let tests: Vec<GeneratedTest> = discover_tests(&config, &deployment).unwrap();
    let report: SuiteReport = run_suite(&tests, &deployment, &FakeReleases::at("focal_ussuri"));

    assert_eq!(report.results().len(), 1);
    assert_eq!(report.failed(), 1);
    let TestOutcome::Failed(failure) = &report.results()[0].outcome else {
        panic!("expected a failure");
    };
    assert_eq!(
        failure.to_string(),
        "Mode is incorrect for keystone/1: 600 (expected 640)"
    );
}
