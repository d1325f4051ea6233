//! The resolved topology graph for one instance.
//!
//! Built once per run by [`crate::processing::resolve_topology`] and consumed
//! by the report renderer. Every downstream entity is a [`Section`], so a
//! partial graph still renders deterministically.

use super::{
    Instance, InternetGateway, PublicAddress, RouteTable, SecurityGroup, SecurityList, Subnet,
    Vcn, Vnic,
};
use crate::error::Fetched;

/// Resolution state of an entity referenced from its parent.
#[derive(Debug)]
pub enum Section<T> {
    /// The parent record carries no reference.
    Missing,
    /// First occurrence in this report; holds the fetch outcome.
    Shown(Fetched<T>),
    /// Already fetched for an earlier subnet. `available` is the outcome of
    /// that first fetch.
    Repeated { id: String, available: bool },
}

/// Instance, vNICs, subnets and NSGs in report order.
#[derive(Debug)]
pub struct Topology {
    pub instance: Instance,
    /// Provider order.
    pub vnics: Vec<VnicNode>,
    /// First-seen order of subnet ids across `vnics`.
    pub subnets: Vec<SubnetNode>,
    /// First-seen order of NSG ids across `vnics`.
    pub security_groups: Vec<SecurityGroupNode>,
}

#[derive(Debug)]
pub struct VnicNode {
    pub vnic: Vnic,
    pub public_address: PublicAddress,
}

#[derive(Debug)]
pub struct SubnetNode {
    pub subnet_id: String,
    pub detail: Fetched<SubnetDetail>,
}

#[derive(Debug)]
pub struct SubnetDetail {
    pub subnet: Subnet,
    pub vcn: Section<Vcn>,
    /// Follows the VCN: repeated when the VCN was already shown.
    pub internet_gateways: Section<Vec<InternetGateway>>,
    pub route_table: Section<RouteTable>,
    /// One entry per distinct security list id on the subnet.
    pub security_lists: Vec<SecurityListNode>,
}

#[derive(Debug)]
pub struct SecurityListNode {
    pub security_list_id: String,
    pub security_list: Section<SecurityList>,
}

#[derive(Debug)]
pub struct SecurityGroupNode {
    pub security_group_id: String,
    pub security_group: Fetched<SecurityGroup>,
}
