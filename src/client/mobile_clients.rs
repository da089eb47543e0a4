// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespaced typed accessor for MobileClient resources.

use std::fmt::Debug;

use futures::Stream;
use kube::api::{
    Api, DeleteParams, ListParams, Patch, PatchParams, PostParams, WatchEvent, WatchParams,
};
use kube::Client;
use serde::Serialize;

use crate::types::{MobileClient, MobileClientList};

/// Works with MobileClient resources in a single namespace.
///
/// Every operation is a straight delegation to the underlying kube client;
/// errors come back exactly as kube produced them.
#[derive(Clone)]
pub struct MobileClients {
    api: Api<MobileClient>,
}

impl MobileClients {
    /// Accessor scoped to the given namespace
    pub fn namespaced(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
        }
    }

    /// Accessor scoped to the client's default namespace
    pub fn default_namespaced(client: Client) -> Self {
        Self {
            api: Api::default_namespaced(client),
        }
    }

    /// Unwrap into the underlying kube Api, e.g. to drive a kube-runtime
    /// watcher
    pub fn into_inner(self) -> Api<MobileClient> {
        self.api
    }

    /// Get the MobileClient with the given name
    pub async fn get(&self, name: &str) -> kube::Result<MobileClient> {
        self.api.get(name).await
    }

    /// List the MobileClients matching the selectors in `lp`
    pub async fn list(&self, lp: &ListParams) -> kube::Result<MobileClientList> {
        self.api.list(lp).await
    }

    /// Open a single watch session starting at `resource_version`.
    ///
    /// The stream ends when the server closes it. Callers that want
    /// automatic resumption should run a kube-runtime watcher over
    /// [`MobileClients::into_inner`] instead.
    pub async fn watch(
        &self,
        wp: &WatchParams,
        resource_version: &str,
    ) -> kube::Result<impl Stream<Item = kube::Result<WatchEvent<MobileClient>>>> {
        self.api.watch(wp, resource_version).await
    }

    /// Create the given MobileClient and return the server's representation
    pub async fn create(
        &self,
        pp: &PostParams,
        client: &MobileClient,
    ) -> kube::Result<MobileClient> {
        self.api.create(pp, client).await
    }

    /// Replace the named MobileClient and return the server's representation.
    /// The object's `metadata.resource_version` must be set or the server
    /// rejects the update.
    pub async fn update(
        &self,
        name: &str,
        pp: &PostParams,
        client: &MobileClient,
    ) -> kube::Result<MobileClient> {
        self.api.replace(name, pp, client).await
    }

    /// Delete the named MobileClient
    pub async fn delete(&self, name: &str, dp: &DeleteParams) -> kube::Result<()> {
        self.api.delete(name, dp).await.map(|_| ())
    }

    /// Delete every MobileClient matching the selectors in `lp`
    pub async fn delete_collection(
        &self,
        dp: &DeleteParams,
        lp: &ListParams,
    ) -> kube::Result<()> {
        self.api.delete_collection(dp, lp).await.map(|_| ())
    }

    /// Apply the given patch to the named MobileClient
    pub async fn patch<P: Serialize + Debug>(
        &self,
        name: &str,
        pp: &PatchParams,
        patch: &Patch<P>,
    ) -> kube::Result<MobileClient> {
        self.api.patch(name, pp, patch).await
    }
}
