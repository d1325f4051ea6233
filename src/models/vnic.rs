//! Virtual network interface and public IP records.

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// A vNIC attached to the instance, as returned by `compute instance list-vnics`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Vnic {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub private_ip: Option<String>,
    /// Public address carried on the vNIC record itself.
    #[serde(default)]
    pub public_ip: Option<String>,
    #[serde(default)]
    pub subnet_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nsg_ids: Vec<String>,
    #[serde(default)]
    pub is_primary: Option<bool>,
    #[serde(default)]
    pub hostname_label: Option<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
}

impl Vnic {
    /// The direct public address, ignoring blank values.
    pub fn direct_public_ip(&self) -> Option<&str> {
        self.public_ip
            .as_deref()
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
    }
}

/// A private IP on a vNIC (`network private-ip list`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PrivateIp {
    pub id: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub is_primary: Option<bool>,
}

/// A public IP resource bound to a private IP (`network public-ip get`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PublicIp {
    pub id: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    /// EPHEMERAL or RESERVED.
    #[serde(default)]
    pub lifetime: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Where a vNIC's public address came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicAddress {
    /// Taken from the vNIC record.
    Direct(String),
    /// Taken from a public IP resource bound to the vNIC.
    Bound {
        address: String,
        lifetime: Option<String>,
    },
    /// Neither source yielded an address.
    Absent,
}

impl PublicAddress {
    pub fn address(&self) -> Option<&str> {
        match self {
            PublicAddress::Direct(address) => Some(address),
            PublicAddress::Bound { address, .. } => Some(address),
            PublicAddress::Absent => None,
        }
    }
}
