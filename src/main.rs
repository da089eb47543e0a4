// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use futures::{pin_mut, TryStreamExt};
use kube::api::ListParams;
use kube::ResourceExt;
use kube_runtime::watcher;
use tracing::info;

use mobile_clients::client::MobileClientset;
use mobile_clients::config::Config;
use mobile_clients::kubernetes::{create_client, wait_for_mobile_client_crd};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting MobileClient watcher");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: namespace={}", config.namespace);

    // Create Kubernetes client
    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    // Wait for the MobileClient CRD before issuing typed requests
    info!("Waiting for MobileClient CRD to become available...");
    wait_for_mobile_client_crd(&client).await?;

    let clientset = MobileClientset::new(client);
    let clients = clientset.mobile_clients(&config.namespace);

    let list = clients.list(&ListParams::default()).await?;
    info!(
        "Found {} mobile client(s) in namespace {}",
        list.items.len(),
        config.namespace
    );
    for mc in &list.items {
        info!(
            "  {} ({}, {})",
            mc.name_any(),
            mc.display_name(),
            mc.spec.client_type
        );
    }

    if !config.watch {
        return Ok(());
    }

    info!("Watching for MobileClient changes...");
    let events = watcher(clients.into_inner(), watcher::Config::default());
    pin_mut!(events);

    while let Some(event) = events.try_next().await? {
        match event {
            watcher::Event::Apply(mc) => {
                info!(
                    "Applied: {} ({}, {})",
                    mc.name_any(),
                    mc.display_name(),
                    mc.spec.client_type
                );
            }
            watcher::Event::Delete(mc) => {
                info!("Deleted: {}", mc.name_any());
            }
            watcher::Event::Init => info!("Watch (re)started"),
            watcher::Event::InitApply(mc) => info!("Existing: {}", mc.name_any()),
            watcher::Event::InitDone => info!("Initial listing complete"),
        }
    }

    Ok(())
}
