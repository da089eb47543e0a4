// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Watcher configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace whose MobileClients are listed and watched
    pub namespace: String,
    /// Optional API server override, e.g. a `kubectl proxy` endpoint
    pub api_server: Option<Url>,
    /// Keep following watch events after the initial listing
    pub watch: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let namespace =
            env::var("MOBILE_CLIENTS_NAMESPACE").unwrap_or_else(|_| "default".to_string());

        let api_server = match env::var("MOBILE_CLIENTS_API_SERVER") {
            Ok(raw) => Some(
                Url::parse(&raw).context("MOBILE_CLIENTS_API_SERVER is not a valid URL")?,
            ),
            Err(_) => None,
        };

        let watch: bool = env::var("MOBILE_CLIENTS_WATCH")
            .unwrap_or("true".to_string())
            .parse()
            .unwrap_or(true);

        Ok(Config {
            namespace,
            api_server,
            watch,
        })
    }
}
