// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed clients for the mobile.k8s.io/v1alpha1 API group.

pub mod clientset;
pub mod mobile_clients;

pub use clientset::MobileClientset;
pub use mobile_clients::MobileClients;
