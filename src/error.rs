// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MobileClientsError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Invalid API server URL: {0}")]
    InvalidApiServer(String),

    #[error("Invalid client type: {0}")]
    InvalidClientType(String),

    #[error("Failed to render CRD manifest: {0}")]
    CrdRenderError(String),
}

pub type Result<T> = std::result::Result<T, MobileClientsError>;
