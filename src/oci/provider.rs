//! Read-only provider interface.

use crate::error::Fetched;
use crate::models::{
    Instance, InternetGateway, PublicIp, RouteTable, SecurityGroup, SecurityList, Subnet, Vcn,
    Vnic,
};

/// Read-only queries against the cloud provider.
///
/// Every method is a single "get" or "list"; none of them change provider
/// state. [`super::OciCli`] is the production implementation.
pub trait NetworkProvider {
    fn get_instance(&self, instance_id: &str) -> Fetched<Instance>;

    /// vNICs attached to the instance, in provider order.
    fn list_vnics(&self, instance_id: &str, compartment_id: Option<&str>) -> Fetched<Vec<Vnic>>;

    /// Public IP resources bound to the vNIC's private IPs. Empty when none are bound.
    fn list_public_ips(&self, vnic_id: &str) -> Fetched<Vec<PublicIp>>;

    fn get_subnet(&self, subnet_id: &str) -> Fetched<Subnet>;

    fn get_vcn(&self, vcn_id: &str) -> Fetched<Vcn>;

    fn list_internet_gateways(
        &self,
        compartment_id: &str,
        vcn_id: &str,
    ) -> Fetched<Vec<InternetGateway>>;

    fn get_route_table(&self, route_table_id: &str) -> Fetched<RouteTable>;

    fn get_security_list(&self, security_list_id: &str) -> Fetched<SecurityList>;

    /// The NSG together with its rules.
    fn get_security_group(&self, security_group_id: &str) -> Fetched<SecurityGroup>;
}
