// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::FileAssertionSpec;

/// Builds the test name for an application's file assertion.
///
/// The name is `test_<application>_<path>`, followed by `_until_<until>` and
/// then `_since_<since>` when those bounds are declared. Two assertions that
/// differ only in their release window therefore get distinct names.
///
/// # Example
///
/// ```text
/// keystone, /etc/keystone/keystone.conf
///     -> test_keystone_/etc/keystone/keystone.conf
/// keystone, /etc/keystone/keystone.conf, until=rocky
///     -> test_keystone_/etc/keystone/keystone.conf_until_rocky
/// ```
#[must_use]
pub fn test_name(application: &str, spec: &FileAssertionSpec) -> String {
    let mut name: String = format!("test_{application}_{}", spec.path);
    if let Some(until) = spec.until_release() {
        name.push_str("_until_");
        name.push_str(until);
    }
    if let Some(since) = spec.since_release() {
        name.push_str("_since_");
        name.push_str(since);
    }
    name
}
