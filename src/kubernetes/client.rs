// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{MobileClientsError, Result};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a Kubernetes client from inferred config (in-cluster or
/// kubeconfig), honoring the API server override when one is configured
pub async fn create_client(config: &Config) -> Result<Client> {
    let kconfig = KConfig::infer().await.map_err(|e| {
        MobileClientsError::KubeconfigError(format!("Failed to infer config: {}", e))
    })?;
    create_client_with_overrides(kconfig, config)
}

/// Apply config overrides to a kube config and build the client
pub fn create_client_with_overrides(mut kconfig: KConfig, config: &Config) -> Result<Client> {
    apply_api_server_override(&mut kconfig, config)?;
    Client::try_from(kconfig)
        .map_err(|e| MobileClientsError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Point the client at the configured API server, e.g. a `kubectl proxy`
/// endpoint, instead of the one the kubeconfig names
fn apply_api_server_override(kconfig: &mut KConfig, config: &Config) -> Result<()> {
    let Some(api_server) = &config.api_server else {
        return Ok(());
    };

    let uri: http::Uri = api_server
        .as_str()
        .parse()
        .map_err(|e| MobileClientsError::InvalidApiServer(format!("{}: {}", api_server, e)))?;
    debug!(
        "Overriding API server URL {} with {}",
        kconfig.cluster_url, uri
    );
    kconfig.cluster_url = uri;
    Ok(())
}

/// Create a Kubernetes client from a kubeconfig document
#[instrument(skip(kubeconfig))]
pub async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    use kube::config::Kubeconfig;

    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig).map_err(|e| {
        MobileClientsError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e))
    })?;

    let client_config =
        KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                MobileClientsError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config)
        .map_err(|e| MobileClientsError::KubeconfigError(format!("Failed to create client: {}", e)))
}
