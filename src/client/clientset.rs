// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::Client;

use crate::client::MobileClients;
use crate::error::Result;

/// Client for the mobile.k8s.io API group.
///
/// Hands out namespaced [`MobileClients`] accessors over a shared
/// `kube::Client`.
#[derive(Clone)]
pub struct MobileClientset {
    client: Client,
}

impl MobileClientset {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a clientset from inferred config (in-cluster or kubeconfig)
    pub async fn try_default() -> Result<Self> {
        Ok(Self::new(Client::try_default().await?))
    }

    /// Typed MobileClient accessor for the given namespace
    pub fn mobile_clients(&self, namespace: &str) -> MobileClients {
        MobileClients::namespaced(self.client.clone(), namespace)
    }

    /// The underlying kube client
    pub fn client(&self) -> Client {
        self.client.clone()
    }
}
