// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API group the MobileClient CRD belongs to
pub const API_GROUP: &str = "mobile.k8s.io";

/// Served version of the mobile.k8s.io group this crate is typed against
pub const API_VERSION: &str = "v1alpha1";

/// Plural resource name under the group/version
pub const RESOURCE_PLURAL: &str = "mobileclients";

/// The field manager name used for server-side apply
pub const FIELD_MANAGER: &str = "mobile-clients";

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for the CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}
