//! Security lists, network security groups and their rules.

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// A subnet-scoped security list (`network security-list get`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SecurityList {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingress_security_rules: Vec<SecurityRule>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub egress_security_rules: Vec<SecurityRule>,
}

/// A network security group with its rules.
///
/// The provider returns the group and its rules from two calls
/// (`network nsg get` and `network nsg rules list`), joined here.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SecurityGroup {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: Vec<SecurityRule>,
}

/// Traffic direction of a rule.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Ingress,
    Egress,
}

/// One allow rule.
///
/// Security list rules carry their direction by the list they sit in; NSG
/// rules carry it in `direction`. Ingress rules use `source`, egress rules
/// use `destination`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SecurityRule {
    #[serde(default)]
    pub direction: Option<Direction>,
    /// "all" or an IANA protocol number ("6", "17", "1", "58").
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub destination_type: Option<String>,
    #[serde(default)]
    pub tcp_options: Option<PortOptions>,
    #[serde(default)]
    pub udp_options: Option<PortOptions>,
    #[serde(default)]
    pub icmp_options: Option<IcmpOptions>,
    #[serde(default)]
    pub is_stateless: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SecurityRule {
    /// Destination port range from whichever transport options are set.
    pub fn destination_port_range(&self) -> Option<PortRange> {
        self.tcp_options
            .as_ref()
            .or(self.udp_options.as_ref())
            .and_then(|o| o.destination_port_range)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PortOptions {
    #[serde(default)]
    pub destination_port_range: Option<PortRange>,
    #[serde(default)]
    pub source_port_range: Option<PortRange>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    pub min: u16,
    pub max: u16,
}

impl std::fmt::Display for PortRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct IcmpOptions {
    #[serde(rename = "type")]
    pub icmp_type: u8,
    #[serde(default)]
    pub code: Option<u8>,
}
