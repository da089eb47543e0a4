// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! MobileClient CRD availability and lifecycle utilities

use crate::constants::crd::{POLL_INTERVAL_SECS, POLL_MAX_INTERVAL_SECS};
use crate::constants::{API_GROUP, API_VERSION, FIELD_MANAGER};
use crate::error::{MobileClientsError, Result};
use crate::types::MobileClient;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::api::{Patch, PatchParams};
use kube::{discovery::Discovery, Api, Client, CustomResourceExt};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

/// Wait for the MobileClient CRD to become available in the cluster.
/// This uses exponential backoff starting at POLL_INTERVAL_SECS seconds.
pub async fn wait_for_mobile_client_crd(client: &Client) -> Result<()> {
    let mut interval = POLL_INTERVAL_SECS;

    loop {
        match mobile_client_crd_exists(client).await {
            Ok(true) => {
                info!("MobileClient CRD (mobile.k8s.io/v1alpha1) is available");
                return Ok(());
            }
            Ok(false) => {
                info!(
                    "MobileClient CRD (mobile.k8s.io/v1alpha1) not yet available, waiting {} seconds...",
                    interval
                );
            }
            Err(e) => {
                warn!(
                    "Error checking for MobileClient CRD: {}, retrying in {} seconds...",
                    e, interval
                );
            }
        }

        sleep(Duration::from_secs(interval)).await;

        // Exponential backoff with max cap
        interval = (interval * 2).min(POLL_MAX_INTERVAL_SECS);
    }
}

/// Check if the MobileClient CRD is served, by attempting to discover it.
pub async fn mobile_client_crd_exists(client: &Client) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[API_GROUP])
        .run()
        .await?;

    for group in discovery.groups() {
        if group.name() == API_GROUP {
            for (ar, _) in group.recommended_resources() {
                if ar.kind == "MobileClient" && ar.version == API_VERSION {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}

/// Render the CRD manifest derived from the typed schema, for
/// `kubectl apply -f -` workflows
pub fn mobile_client_crd_yaml() -> Result<String> {
    serde_yaml::to_string(&MobileClient::crd())
        .map_err(|e| MobileClientsError::CrdRenderError(e.to_string()))
}

/// Install or update the MobileClient CRD with server-side apply
#[instrument(skip(client))]
pub async fn apply_mobile_client_crd(client: &Client) -> Result<CustomResourceDefinition> {
    let crds: Api<CustomResourceDefinition> = Api::all(client.clone());
    let pp = PatchParams::apply(FIELD_MANAGER).force();

    info!("Applying CRD {}", MobileClient::crd_name());
    let applied = crds
        .patch(
            MobileClient::crd_name(),
            &pp,
            &Patch::Apply(&MobileClient::crd()),
        )
        .await?;

    Ok(applied)
}
