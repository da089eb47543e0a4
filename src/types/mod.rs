// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed definitions for the mobile.k8s.io API group.

pub mod mobile_client;

pub use mobile_client::{ClientType, MobileClient, MobileClientList, MobileClientSpec};
