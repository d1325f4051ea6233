//! Subnet, VCN, internet gateway and route table records.

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// A subnet (`network subnet get`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Subnet {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub cidr_block: Option<String>,
    /// None for regional subnets.
    #[serde(default)]
    pub availability_domain: Option<String>,
    #[serde(default)]
    pub compartment_id: Option<String>,
    #[serde(default)]
    pub vcn_id: Option<String>,
    #[serde(default)]
    pub route_table_id: Option<String>,
    #[serde(default)]
    pub dhcp_options_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub security_list_ids: Vec<String>,
    #[serde(default)]
    pub prohibit_public_ip_on_vnic: Option<bool>,
}

/// A virtual cloud network (`network vcn get`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Vcn {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Deprecated single block, still populated by the API.
    #[serde(default)]
    pub cidr_block: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cidr_blocks: Vec<String>,
    #[serde(default)]
    pub compartment_id: Option<String>,
}

impl Vcn {
    /// All CIDR blocks, falling back to the single deprecated field.
    pub fn cidrs(&self) -> Vec<&str> {
        if self.cidr_blocks.is_empty() {
            self.cidr_block.iter().map(String::as_str).collect()
        } else {
            self.cidr_blocks.iter().map(String::as_str).collect()
        }
    }
}

/// An internet gateway (`network internet-gateway list`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct InternetGateway {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub compartment_id: Option<String>,
    #[serde(default)]
    pub is_enabled: Option<bool>,
    #[serde(default)]
    pub lifecycle_state: Option<String>,
}

/// A route table (`network route-table get`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RouteTable {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Provider order is preserved.
    #[serde(default, deserialize_with = "null_as_default")]
    pub route_rules: Vec<RouteRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RouteRule {
    #[serde(default)]
    pub destination: Option<String>,
    /// Older API field used before `destination`.
    #[serde(default)]
    pub cidr_block: Option<String>,
    /// CIDR_BLOCK or SERVICE_CIDR_BLOCK.
    #[serde(default)]
    pub destination_type: Option<String>,
    #[serde(default)]
    pub network_entity_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RouteRule {
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref().or(self.cidr_block.as_deref())
    }
}
