// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApplicationConfig, JujuStatus, series_for_base};
use unitstat::{RemoteError, Unit};

const STATUS_JUJU2: &str = r#"{
  "model": {"name": "openstack", "type": "iaas"},
  "machines": {},
  "applications": {
    "keystone": {
      "charm": "keystone",
      "series": "bionic",
      "units": {
        "keystone/10": {"workload-status": {"current": "active"}},
        "keystone/2": {"workload-status": {"current": "active"}},
        "keystone/0": {"workload-status": {"current": "active"}}
      }
    },
    "keystone-hacluster": {
      "charm": "hacluster",
      "series": "bionic",
      "subordinate-to": ["keystone"]
    },
    "nova-compute": {
      "charm": "nova-compute",
      "series": "bionic",
      "units": {
        "nova-compute/0": {
          "workload-status": {"current": "active"},
          "subordinates": {
            "neutron-openvswitch/1": {"workload-status": {"current": "active"}},
            "ceilometer-agent/0": {"workload-status": {"current": "active"}}
          }
        },
        "nova-compute/1": {
          "workload-status": {"current": "active"},
          "subordinates": {
            "neutron-openvswitch/0": {"workload-status": {"current": "active"}},
            "ceilometer-agent/1": {"workload-status": {"current": "active"}}
          }
        }
      }
    },
    "neutron-openvswitch": {
      "charm": "neutron-openvswitch",
      "series": "bionic",
      "subordinate-to": ["nova-compute"]
    },
    "ceilometer-agent": {
      "charm": "ceilometer-agent",
      "series": "bionic",
      "subordinate-to": ["nova-compute"]
    }
  }
}"#;

const STATUS_JUJU3: &str = r#"{
  "applications": {
    "nova-compute": {
      "charm": "nova-compute",
      "base": {"name": "ubuntu", "channel": "22.04"},
      "units": {"nova-compute/0": {}}
    }
  }
}"#;

fn unit_ids(status: &JujuStatus, application: &str) -> Vec<String> {
    status
        .units(application)
        .unwrap()
        .iter()
        .map(|unit| unit.entity_id().to_string())
        .collect()
}

#[test]
fn test_parse_status_applications() {
    let status: JujuStatus = JujuStatus::from_json(STATUS_JUJU2.as_bytes()).unwrap();

    let names: Vec<&str> = status.applications.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "ceilometer-agent",
            "keystone",
            "keystone-hacluster",
            "neutron-openvswitch",
            "nova-compute"
        ]
    );
}

#[test]
fn test_units_sorted_numerically() {
    let status: JujuStatus = JujuStatus::from_json(STATUS_JUJU2.as_bytes()).unwrap();

    assert_eq!(
        unit_ids(&status, "keystone"),
        vec!["keystone/0", "keystone/2", "keystone/10"]
    );
}

#[test]
fn test_subordinate_units_are_found_under_principals() {
    let status: JujuStatus = JujuStatus::from_json(STATUS_JUJU2.as_bytes()).unwrap();

    assert_eq!(
        unit_ids(&status, "neutron-openvswitch"),
        vec!["neutron-openvswitch/0", "neutron-openvswitch/1"]
    );
    assert_eq!(
        unit_ids(&status, "ceilometer-agent"),
        vec!["ceilometer-agent/0", "ceilometer-agent/1"]
    );
}

#[test]
fn test_principal_units_exclude_subordinates() {
    let status: JujuStatus = JujuStatus::from_json(STATUS_JUJU2.as_bytes()).unwrap();

    assert_eq!(
        unit_ids(&status, "nova-compute"),
        vec!["nova-compute/0", "nova-compute/1"]
    );
}

#[test]
fn test_subordinate_without_attached_units_has_none() {
    let status: JujuStatus = JujuStatus::from_json(STATUS_JUJU2.as_bytes()).unwrap();

    assert!(unit_ids(&status, "keystone-hacluster").is_empty());
}

#[test]
fn test_units_of_missing_application_is_not_found() {
    let status: JujuStatus = JujuStatus::from_json(STATUS_JUJU3.as_bytes()).unwrap();

    let result: Result<Vec<Unit>, RemoteError> = status.units("glance");
    assert!(matches!(result, Err(RemoteError::ApplicationNotFound(name)) if name == "glance"));
}

#[test]
fn test_series_from_juju2_status() {
    let status: JujuStatus = JujuStatus::from_json(STATUS_JUJU2.as_bytes()).unwrap();

    assert_eq!(
        status.application("keystone").unwrap().series().as_deref(),
        Some("bionic")
    );
}

#[test]
fn test_series_from_juju3_base() {
    let status: JujuStatus = JujuStatus::from_json(STATUS_JUJU3.as_bytes()).unwrap();

    assert_eq!(
        status.application("nova-compute").unwrap().series().as_deref(),
        Some("jammy")
    );
}

#[test]
fn test_missing_application_is_not_found() {
    let status: JujuStatus = JujuStatus::from_json(STATUS_JUJU3.as_bytes()).unwrap();

    let result: Result<_, RemoteError> = status.application("keystone");
    assert!(matches!(result, Err(RemoteError::ApplicationNotFound(name)) if name == "keystone"));
}

#[test]
fn test_empty_model_has_no_applications() {
    let status: JujuStatus = JujuStatus::from_json(br#"{"model": {"name": "empty"}}"#).unwrap();

    assert!(status.applications.is_empty());
}

#[test]
fn test_invalid_status_is_decode_error() {
    let result: Result<JujuStatus, RemoteError> = JujuStatus::from_json(b"ERROR no controller");

    assert!(matches!(result, Err(RemoteError::Decode { .. })));
}

#[test]
fn test_series_for_base_channels() {
    assert_eq!(series_for_base("20.04"), Some("focal"));
    assert_eq!(series_for_base("24.04/stable"), Some("noble"));
    assert_eq!(series_for_base("9.99"), None);
}

#[test]
fn test_config_origin_prefers_openstack_origin() {
    let config: ApplicationConfig = ApplicationConfig::from_json(
        br#"{
          "application": "keystone",
          "charm": "keystone",
          "settings": {
            "openstack-origin": {"type": "string", "value": "cloud:focal-victoria"},
            "source": {"type": "string", "value": "distro"}
          }
        }"#,
    )
    .unwrap();

    assert_eq!(config.origin(), Some("cloud:focal-victoria"));
}

#[test]
fn test_config_origin_falls_back_to_source() {
    let config: ApplicationConfig = ApplicationConfig::from_json(
        br#"{
          "settings": {
            "openstack-origin": {"type": "string", "value": ""},
            "source": {"type": "string", "value": "cloud:bionic-rocky"}
          }
        }"#,
    )
    .unwrap();

    assert_eq!(config.origin(), Some("cloud:bionic-rocky"));
}

#[test]
fn test_config_without_origin() {
    let config: ApplicationConfig = ApplicationConfig::from_json(
        br#"{"settings": {"debug": {"type": "boolean", "value": false}}}"#,
    )
    .unwrap();

    assert_eq!(config.origin(), None);
    assert_eq!(config.string("debug"), None);
}
