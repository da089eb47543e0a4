// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and CRD lifecycle management.

pub mod client;
pub mod crd;

pub use client::{create_client, create_client_from_kubeconfig};
pub use crd::{
    apply_mobile_client_crd, mobile_client_crd_exists, mobile_client_crd_yaml,
    wait_for_mobile_client_crd,
};
