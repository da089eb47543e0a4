// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use std::str::FromStr;

use kube::core::ObjectList;
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

use crate::error::MobileClientsError;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "mobile.k8s.io", version = "v1alpha1", kind = "MobileClient")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct MobileClientSpec {
    /// Human-facing name of the mobile client
    pub name: String,
    /// Key the app presents to backing mobile services
    pub api_key: String,
    pub client_type: ClientType,
    /// Platform bundle/package identifier, e.g. "org.aerogear.shop"
    pub app_identifier: String,
}

/// List type returned by the collection endpoints
pub type MobileClientList = ObjectList<MobileClient>;

/// Platform a MobileClient is built for. Wire values match the CRD schema,
/// including the mixed-case "iOS".
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub enum ClientType {
    #[serde(rename = "android")]
    Android,
    #[serde(rename = "cordova")]
    Cordova,
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "xamarin")]
    Xamarin,
}

impl ClientType {
    /// Wire representation of this client type
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Android => "android",
            ClientType::Cordova => "cordova",
            ClientType::Ios => "iOS",
            ClientType::Xamarin => "xamarin",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = MobileClientsError;

    /// Parse a client type from user input. Any casing is accepted;
    /// rendering always uses the wire casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(ClientType::Android),
            "cordova" => Ok(ClientType::Cordova),
            "ios" => Ok(ClientType::Ios),
            "xamarin" => Ok(ClientType::Xamarin),
            _ => Err(MobileClientsError::InvalidClientType(s.to_string())),
        }
    }
}

impl MobileClient {
    /// Human-facing name: the spec name when set, otherwise the resource name
    pub fn display_name(&self) -> String {
        if self.spec.name.is_empty() {
            self.name_any()
        } else {
            self.spec.name.clone()
        }
    }
}
