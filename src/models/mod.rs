//! Domain models for the network report.
//!
//! Provider records deserialize straight from the CLI's kebab-case JSON:
//! - [`Instance`] - the compute node
//! - [`Vnic`], [`PrivateIp`], [`PublicIp`] - interfaces and addressing
//! - [`Subnet`], [`Vcn`], [`InternetGateway`], [`RouteTable`] - network path
//! - [`SecurityList`], [`SecurityGroup`], [`SecurityRule`] - traffic rules
//! - [`Topology`] - the resolved graph handed to the renderer

mod instance;
mod network;
mod security;
mod topology;
mod vnic;

use serde::{Deserialize, Deserializer};

// Re-export public types
pub use instance::Instance;
pub use network::{InternetGateway, RouteRule, RouteTable, Subnet, Vcn};
pub use security::{
    Direction, IcmpOptions, PortOptions, PortRange, SecurityGroup, SecurityList, SecurityRule,
};
pub use topology::{
    Section, SecurityGroupNode, SecurityListNode, SubnetDetail, SubnetNode, Topology, VnicNode,
};
pub use vnic::{PrivateIp, PublicAddress, PublicIp, Vnic};

/// Deserialize an explicit JSON `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
