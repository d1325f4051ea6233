//! Test support: a recording in-memory provider loaded from `test_data/`.

use crate::error::{FetchError, Fetched};
use crate::models::{
    Instance, InternetGateway, PublicIp, RouteTable, SecurityGroup, SecurityList, SecurityRule,
    Subnet, Vcn, Vnic,
};
use crate::oci::{parse_data, parse_list, NetworkProvider};
use std::cell::RefCell;
use std::collections::HashMap;

pub(crate) const INSTANCE_ID: &str = "ocid1.instance.oc1.phx.anyhqljrexample123";
pub(crate) const SUBNET_ID: &str = "ocid1.subnet.oc1.phx.aaaaexamplesubnet1";
pub(crate) const SUBNET2_ID: &str = "ocid1.subnet.oc1.phx.aaaaexamplesubnet2";
pub(crate) const VCN_ID: &str = "ocid1.vcn.oc1.phx.aaaaexamplevcn1";
pub(crate) const SL1_ID: &str = "ocid1.securitylist.oc1.phx.aaaaexamplesl1";
pub(crate) const SL2_ID: &str = "ocid1.securitylist.oc1.phx.aaaaexamplesl2";
pub(crate) const NSG_ID: &str = "ocid1.networksecuritygroup.oc1.phx.aaaaexamplensg1";
pub(crate) const VNIC2_ID: &str = "ocid1.vnic.oc1.phx.aaaaexamplevnic2";

pub(crate) fn read_test_data(name: &str) -> String {
    std::fs::read_to_string(format!("src/tests/test_data/{name}"))
        .unwrap_or_else(|e| panic!("Error reading test data {name}: {e}"))
}

/// Provider backed by hash maps. Absent entries fail like a permission error.
#[derive(Default)]
pub(crate) struct FakeProvider {
    pub instance: Option<Instance>,
    pub vnics: Option<Vec<Vnic>>,
    /// Keyed by vNIC id; absent means no public IP bound.
    pub public_ips: HashMap<String, Vec<PublicIp>>,
    pub subnets: HashMap<String, Subnet>,
    pub vcns: HashMap<String, Vcn>,
    /// Keyed by VCN id, filtered by compartment on listing.
    pub internet_gateways: HashMap<String, Vec<InternetGateway>>,
    pub route_tables: HashMap<String, RouteTable>,
    pub security_lists: HashMap<String, SecurityList>,
    pub security_groups: HashMap<String, SecurityGroup>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeProvider {
    /// The two-vNIC, one-subnet topology from `test_data/`.
    pub fn from_test_data() -> FakeProvider {
        let instance: Instance =
            parse_data("instance", &read_test_data("compute_instance_get.json")).unwrap();
        let vnics: Vec<Vnic> =
            parse_list("vnics", &read_test_data("compute_instance_list-vnics.json")).unwrap();
        let subnet: Subnet =
            parse_data("subnet", &read_test_data("network_subnet_get.json")).unwrap();
        let vcn: Vcn = parse_data("vcn", &read_test_data("network_vcn_get.json")).unwrap();
        let gateways: Vec<InternetGateway> = parse_list(
            "igw",
            &read_test_data("network_internet-gateway_list.json"),
        )
        .unwrap();
        let route_table: RouteTable =
            parse_data("rt", &read_test_data("network_route-table_get.json")).unwrap();
        let mut nsg: SecurityGroup =
            parse_data("nsg", &read_test_data("network_nsg_get.json")).unwrap();
        nsg.rules =
            parse_list::<SecurityRule>("nsg rules", &read_test_data("network_nsg_rules.json"))
                .unwrap();

        let mut provider = FakeProvider {
            instance: Some(instance),
            vnics: Some(vnics),
            ..Default::default()
        };
        provider.subnets.insert(subnet.id.clone(), subnet);
        provider.vcns.insert(vcn.id.clone(), vcn);
        provider
            .internet_gateways
            .insert(VCN_ID.to_string(), gateways);
        provider
            .route_tables
            .insert(route_table.id.clone(), route_table);
        for id in [SL1_ID, SL2_ID] {
            let list: SecurityList = parse_data(
                "security list",
                &read_test_data(&format!("network_security-list_get.{id}.json")),
            )
            .unwrap();
            provider.security_lists.insert(id.to_string(), list);
        }
        provider.security_groups.insert(nsg.id.clone(), nsg);
        provider
    }

    /// Moves the second vNIC to `private-subnet`, which shares the VCN and
    /// the second security list and has no route table.
    pub fn with_second_subnet(mut self) -> FakeProvider {
        let mut subnet = self.subnets[SUBNET_ID].clone();
        subnet.id = SUBNET2_ID.to_string();
        subnet.display_name = Some("private-subnet".to_string());
        subnet.route_table_id = None;
        subnet.security_list_ids = vec![SL2_ID.to_string()];
        self.subnets.insert(SUBNET2_ID.to_string(), subnet);
        if let Some(vnics) = self.vnics.as_mut() {
            vnics[1].subnet_id = Some(SUBNET2_ID.to_string());
        }
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls to `operation`.
    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.split(' ').next() == Some(operation))
            .count()
    }

    fn record(&self, operation: &str, id: &str) {
        self.calls.borrow_mut().push(format!("{operation} {id}"));
    }
}

fn denied(operation: &str, id: &str) -> FetchError {
    FetchError::Command {
        command: format!("fake {operation} {id}"),
        status: "exit status: 1".to_string(),
        stderr: "ServiceError: NotAuthorized".to_string(),
    }
}

fn lookup<T: Clone>(map: &HashMap<String, T>, operation: &str, id: &str) -> Fetched<T> {
    map.get(id).cloned().ok_or_else(|| denied(operation, id))
}

impl NetworkProvider for FakeProvider {
    fn get_instance(&self, instance_id: &str) -> Fetched<Instance> {
        self.record("get_instance", instance_id);
        self.instance
            .clone()
            .ok_or_else(|| denied("get_instance", instance_id))
    }

    fn list_vnics(&self, instance_id: &str, _compartment_id: Option<&str>) -> Fetched<Vec<Vnic>> {
        self.record("list_vnics", instance_id);
        self.vnics
            .clone()
            .ok_or_else(|| denied("list_vnics", instance_id))
    }

    fn list_public_ips(&self, vnic_id: &str) -> Fetched<Vec<PublicIp>> {
        self.record("list_public_ips", vnic_id);
        Ok(self.public_ips.get(vnic_id).cloned().unwrap_or_default())
    }

    fn get_subnet(&self, subnet_id: &str) -> Fetched<Subnet> {
        self.record("get_subnet", subnet_id);
        lookup(&self.subnets, "get_subnet", subnet_id)
    }

    fn get_vcn(&self, vcn_id: &str) -> Fetched<Vcn> {
        self.record("get_vcn", vcn_id);
        lookup(&self.vcns, "get_vcn", vcn_id)
    }

    fn list_internet_gateways(
        &self,
        compartment_id: &str,
        vcn_id: &str,
    ) -> Fetched<Vec<InternetGateway>> {
        self.record(
            "list_internet_gateways",
            &format!("{compartment_id} {vcn_id}"),
        );
        let gateways = lookup(&self.internet_gateways, "list_internet_gateways", vcn_id)?;
        // Listing is scoped to one compartment, like the real API.
        Ok(gateways
            .into_iter()
            .filter(|g| g.compartment_id.as_deref().map_or(true, |c| c == compartment_id))
            .collect())
    }

    fn get_route_table(&self, route_table_id: &str) -> Fetched<RouteTable> {
        self.record("get_route_table", route_table_id);
        lookup(&self.route_tables, "get_route_table", route_table_id)
    }

    fn get_security_list(&self, security_list_id: &str) -> Fetched<SecurityList> {
        self.record("get_security_list", security_list_id);
        lookup(&self.security_lists, "get_security_list", security_list_id)
    }

    fn get_security_group(&self, security_group_id: &str) -> Fetched<SecurityGroup> {
        self.record("get_security_group", security_group_id);
        lookup(&self.security_groups, "get_security_group", security_group_id)
    }
}
