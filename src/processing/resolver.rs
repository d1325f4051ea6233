//! Single-pass resolution of an instance's network topology.
//!
//! Calls are made one at a time in a fixed order. Only the instance and its
//! vNIC list are required; every later fetch degrades to a failed
//! [`Section`] and resolution carries on.

use super::dedup::{unique_security_group_ids, unique_subnet_ids};
use super::public_ip::resolve_public_address;
use crate::error::{FetchError, Fetched, ReportError};
use crate::models::{
    Section, SecurityGroupNode, SecurityListNode, Subnet, SubnetDetail, SubnetNode, Topology,
    VnicNode,
};
use crate::oci::{ocid, NetworkProvider};
use itertools::Itertools;
use std::collections::HashMap;

/// Ids already fetched for the report, with whether the fetch succeeded.
/// Shared entities are fetched once.
#[derive(Default)]
struct Seen {
    vcns: HashMap<String, bool>,
    /// Keyed by VCN id.
    internet_gateways: HashMap<String, bool>,
    security_lists: HashMap<String, bool>,
}

/// Resolve the topology of `instance_id`.
///
/// # Returns
/// * `Ok(Topology)` - Possibly partial; failed entities are kept as errors
/// * `Err` - Malformed id (before any call), instance fetch failure, or
///   vNIC list failure / empty list
pub fn resolve_topology<P>(provider: &P, instance_id: &str) -> Result<Topology, ReportError>
where
    P: NetworkProvider + ?Sized,
{
    ocid::validate_instance_id(instance_id)?;

    log::info!("Fetching instance {instance_id}");
    let instance = provider
        .get_instance(instance_id)
        .map_err(|source| ReportError::InstanceFetch {
            instance_id: instance_id.to_string(),
            source,
        })?;

    let vnics = provider
        .list_vnics(instance_id, instance.compartment_id.as_deref())
        .map_err(|source| ReportError::VnicList {
            instance_id: instance_id.to_string(),
            source,
        })?;
    if vnics.is_empty() {
        return Err(ReportError::NoVnics(instance_id.to_string()));
    }
    log::info!("Found {} vNIC(s)", vnics.len());

    let vnics: Vec<VnicNode> = vnics
        .into_iter()
        .map(|vnic| {
            let public_address = resolve_public_address(provider, &vnic);
            VnicNode {
                vnic,
                public_address,
            }
        })
        .collect();

    let subnet_ids = unique_subnet_ids(vnics.iter().map(|n| &n.vnic));
    let security_group_ids = unique_security_group_ids(vnics.iter().map(|n| &n.vnic));
    log::info!(
        "Resolving {} subnet(s) and {} NSG(s)",
        subnet_ids.len(),
        security_group_ids.len()
    );

    let mut seen = Seen::default();
    let subnets = subnet_ids
        .into_iter()
        .map(|subnet_id| resolve_subnet(provider, subnet_id, &mut seen))
        .collect();

    let security_groups = security_group_ids
        .into_iter()
        .map(|security_group_id| {
            let security_group = logged(
                "NSG",
                &security_group_id,
                provider.get_security_group(&security_group_id),
            );
            SecurityGroupNode {
                security_group_id,
                security_group,
            }
        })
        .collect();

    Ok(Topology {
        instance,
        vnics,
        subnets,
        security_groups,
    })
}

fn resolve_subnet<P>(provider: &P, subnet_id: String, seen: &mut Seen) -> SubnetNode
where
    P: NetworkProvider + ?Sized,
{
    log::info!("Fetching subnet {subnet_id}");
    let detail = logged("subnet", &subnet_id, provider.get_subnet(&subnet_id))
        .map(|subnet| resolve_subnet_detail(provider, subnet, seen));
    SubnetNode { subnet_id, detail }
}

fn resolve_subnet_detail<P>(provider: &P, subnet: Subnet, seen: &mut Seen) -> SubnetDetail
where
    P: NetworkProvider + ?Sized,
{
    let (vcn, internet_gateways) = match subnet.vcn_id.as_deref() {
        None => (Section::Missing, Section::Missing),
        Some(vcn_id) => {
            let first_fetch = seen.vcns.get(vcn_id).copied();
            match first_fetch.zip(seen.internet_gateways.get(vcn_id).copied()) {
                Some((vcn_ok, gateways_ok)) => (repeated(vcn_id, vcn_ok), repeated(vcn_id, gateways_ok)),
                None => {
                    let vcn = logged("VCN", vcn_id, provider.get_vcn(vcn_id));
                    // Gateways live with the VCN, which may sit in another
                    // compartment than the subnet.
                    let compartment_id = vcn
                        .as_ref()
                        .ok()
                        .and_then(|v| v.compartment_id.clone())
                        .or_else(|| subnet.compartment_id.clone());
                    let gateways = match compartment_id {
                        Some(compartment_id) => {
                            provider.list_internet_gateways(&compartment_id, vcn_id)
                        }
                        None => Err(FetchError::NotFound {
                            what: format!("compartment for VCN {vcn_id}"),
                        }),
                    };
                    let gateways = logged("internet gateways of VCN", vcn_id, gateways);
                    seen.vcns.insert(vcn_id.to_string(), vcn.is_ok());
                    seen.internet_gateways.insert(vcn_id.to_string(), gateways.is_ok());
                    (Section::Shown(vcn), Section::Shown(gateways))
                }
            }
        }
    };

    let route_table = match subnet.route_table_id.as_deref() {
        Some(route_table_id) => Section::Shown(logged(
            "route table",
            route_table_id,
            provider.get_route_table(route_table_id),
        )),
        None => Section::Missing,
    };

    let security_lists = subnet
        .security_list_ids
        .iter()
        .unique()
        .map(|security_list_id| {
            let first_fetch = seen.security_lists.get(security_list_id).copied();
            let security_list = match first_fetch {
                Some(available) => repeated(security_list_id, available),
                None => {
                    let fetched = logged(
                        "security list",
                        security_list_id,
                        provider.get_security_list(security_list_id),
                    );
                    seen.security_lists.insert(security_list_id.clone(), fetched.is_ok());
                    Section::Shown(fetched)
                }
            };
            SecurityListNode {
                security_list_id: security_list_id.clone(),
                security_list,
            }
        })
        .collect();

    SubnetDetail {
        subnet,
        vcn,
        internet_gateways,
        route_table,
        security_lists,
    }
}

fn repeated<T>(id: &str, available: bool) -> Section<T> {
    Section::Repeated {
        id: id.to_string(),
        available,
    }
}

/// Log a degraded fetch and pass the result through.
fn logged<T>(kind: &str, id: &str, result: Fetched<T>) -> Fetched<T> {
    if let Err(e) = &result {
        log::warn!("Failed to fetch {kind} {id}: {e}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PublicAddress, SecurityList, Vcn};
    use crate::tests::{
        FakeProvider, INSTANCE_ID, NSG_ID, SL1_ID, SL2_ID, SUBNET_ID, VCN_ID, VNIC2_ID,
    };

    #[test]
    fn test_resolve_full_topology() {
        let provider = FakeProvider::from_test_data();
        let topology = resolve_topology(&provider, INSTANCE_ID).expect("Error resolving");

        assert_eq!(topology.vnics.len(), 2);
        assert_eq!(topology.subnets.len(), 1, "shared subnet must resolve once");
        assert_eq!(topology.security_groups.len(), 1, "shared NSG must resolve once");
        assert_eq!(provider.call_count("get_subnet"), 1);
        assert_eq!(provider.call_count("get_security_group"), 1);

        let detail = topology.subnets[0].detail.as_ref().expect("subnet resolved");
        assert!(matches!(detail.vcn, Section::Shown(Ok(_))));
        assert!(matches!(detail.internet_gateways, Section::Shown(Ok(ref g)) if g.len() == 1));
        assert!(matches!(detail.route_table, Section::Shown(Ok(_))));
        let ids: Vec<&str> = detail
            .security_lists
            .iter()
            .map(|s| s.security_list_id.as_str())
            .collect();
        assert_eq!(ids, vec![SL1_ID, SL2_ID]);
    }

    #[test]
    fn test_public_address_priority() {
        let provider = FakeProvider::from_test_data();
        let topology = resolve_topology(&provider, INSTANCE_ID).expect("Error resolving");

        assert_eq!(
            topology.vnics[0].public_address,
            PublicAddress::Direct("203.0.113.10".to_string())
        );
        assert_eq!(topology.vnics[1].public_address, PublicAddress::Absent);
        // Only the vNIC without a direct address is looked up.
        assert_eq!(
            provider
                .calls()
                .iter()
                .filter(|c| c.starts_with("list_public_ips"))
                .collect::<Vec<_>>(),
            vec![&format!("list_public_ips {VNIC2_ID}")]
        );
    }

    #[test]
    fn test_malformed_id_makes_no_calls() {
        let provider = FakeProvider::from_test_data();
        let err = resolve_topology(&provider, "i-0123456789").unwrap_err();
        assert!(matches!(err, ReportError::BadInstanceId(_)));
        assert!(provider.calls().is_empty(), "calls: {:?}", provider.calls());
    }

    #[test]
    fn test_instance_fetch_failure_is_fatal() {
        let provider = FakeProvider {
            instance: None,
            ..FakeProvider::from_test_data()
        };
        let err = resolve_topology(&provider, INSTANCE_ID).unwrap_err();
        assert!(matches!(err, ReportError::InstanceFetch { .. }));
        assert_eq!(provider.calls(), vec![format!("get_instance {INSTANCE_ID}")]);
    }

    #[test]
    fn test_no_vnics_is_fatal() {
        let provider = FakeProvider {
            vnics: Some(vec![]),
            ..FakeProvider::from_test_data()
        };
        let err = resolve_topology(&provider, INSTANCE_ID).unwrap_err();
        assert!(matches!(err, ReportError::NoVnics(_)));

        let provider = FakeProvider {
            vnics: None,
            ..FakeProvider::from_test_data()
        };
        let err = resolve_topology(&provider, INSTANCE_ID).unwrap_err();
        assert!(matches!(err, ReportError::VnicList { .. }));
    }

    #[test]
    fn test_failed_subnet_does_not_stop_others() {
        let mut provider = FakeProvider::from_test_data();
        let second = "ocid1.subnet.oc1.phx.aaaaexamplesubnet2";
        let mut subnet = provider.subnets[SUBNET_ID].clone();
        subnet.id = second.to_string();
        provider.subnets.insert(second.to_string(), subnet);
        provider.subnets.remove(SUBNET_ID);
        if let Some(vnics) = provider.vnics.as_mut() {
            vnics[1].subnet_id = Some(second.to_string());
        }

        let topology = resolve_topology(&provider, INSTANCE_ID).expect("Error resolving");
        assert_eq!(topology.subnets.len(), 2);
        assert_eq!(topology.subnets[0].subnet_id, SUBNET_ID);
        assert!(topology.subnets[0].detail.is_err());
        let detail = topology.subnets[1].detail.as_ref().expect("second subnet");
        assert!(matches!(detail.vcn, Section::Shown(Ok(_))));
        assert!(matches!(detail.route_table, Section::Shown(Ok(_))));
        assert_eq!(detail.security_lists.len(), 2);
        assert!(detail
            .security_lists
            .iter()
            .all(|s| matches!(s.security_list, Section::Shown(Ok(_)))));
    }

    #[test]
    fn test_failed_route_table_keeps_siblings() {
        let mut provider = FakeProvider::from_test_data();
        provider.route_tables.clear();
        provider.security_lists.remove(SL2_ID);

        let topology = resolve_topology(&provider, INSTANCE_ID).expect("Error resolving");
        let detail = topology.subnets[0].detail.as_ref().expect("subnet resolved");
        assert!(matches!(detail.route_table, Section::Shown(Err(_))));
        assert!(matches!(detail.vcn, Section::Shown(Ok(_))));
        assert!(matches!(
            detail.security_lists[0].security_list,
            Section::Shown(Ok(_))
        ));
        assert!(matches!(
            detail.security_lists[1].security_list,
            Section::Shown(Err(_))
        ));
        assert!(matches!(
            topology.security_groups[0].security_group,
            Ok(ref g) if g.id == NSG_ID
        ));
    }

    #[test]
    fn test_shared_vcn_and_security_list_fetched_once() {
        let mut provider = FakeProvider::from_test_data();
        let second = "ocid1.subnet.oc1.phx.aaaaexamplesubnet2";
        let mut subnet = provider.subnets[SUBNET_ID].clone();
        subnet.id = second.to_string();
        subnet.security_list_ids = vec![SL2_ID.to_string(), SL2_ID.to_string()];
        subnet.route_table_id = None;
        provider.subnets.insert(second.to_string(), subnet);
        if let Some(vnics) = provider.vnics.as_mut() {
            vnics[1].subnet_id = Some(second.to_string());
        }

        let topology = resolve_topology(&provider, INSTANCE_ID).expect("Error resolving");
        assert_eq!(provider.call_count("get_vcn"), 1);
        assert_eq!(provider.call_count("list_internet_gateways"), 1);
        assert_eq!(provider.call_count("get_security_list"), 2);
        assert_eq!(provider.call_count("get_route_table"), 1);

        let detail = topology.subnets[1].detail.as_ref().expect("second subnet");
        assert!(matches!(
            detail.vcn,
            Section::Repeated { ref id, available: true } if id == VCN_ID
        ));
        assert!(matches!(detail.route_table, Section::Missing));
        assert_eq!(detail.security_lists.len(), 1);
        assert!(matches!(
            detail.security_lists[0].security_list,
            Section::Repeated { available: true, .. }
        ));
    }

    #[test]
    fn test_gateways_listed_in_vcn_compartment() {
        let mut provider = FakeProvider::from_test_data();
        let network = "ocid1.compartment.oc1..aaaaexamplenetwork";
        if let Some(subnet) = provider.subnets.get_mut(SUBNET_ID) {
            subnet.compartment_id = Some("ocid1.compartment.oc1..aaaaexampleapp".to_string());
        }
        if let Some(vcn) = provider.vcns.get_mut(VCN_ID) {
            vcn.compartment_id = Some(network.to_string());
        }
        for gateway in provider.internet_gateways.values_mut().flatten() {
            gateway.compartment_id = Some(network.to_string());
        }

        let topology = resolve_topology(&provider, INSTANCE_ID).expect("Error resolving");
        let detail = topology.subnets[0].detail.as_ref().expect("subnet resolved");
        assert!(matches!(detail.internet_gateways, Section::Shown(Ok(ref g)) if g.len() == 1));
        assert!(provider
            .calls()
            .contains(&format!("list_internet_gateways {network} {VCN_ID}")));
    }

    #[test]
    fn test_gateways_fall_back_to_subnet_compartment() {
        let mut provider = FakeProvider::from_test_data();
        provider.vcns.clear();
        let topology = resolve_topology(&provider, INSTANCE_ID).expect("Error resolving");
        let detail = topology.subnets[0].detail.as_ref().expect("subnet resolved");
        assert!(matches!(detail.vcn, Section::Shown(Err(_))));
        assert!(matches!(detail.internet_gateways, Section::Shown(Ok(_))));

        if let Some(subnet) = provider.subnets.get_mut(SUBNET_ID) {
            subnet.compartment_id = None;
        }
        let topology = resolve_topology(&provider, INSTANCE_ID).expect("Error resolving");
        let detail = topology.subnets[0].detail.as_ref().expect("subnet resolved");
        assert!(matches!(detail.internet_gateways, Section::Shown(Err(_))));
    }

    #[test]
    fn test_repeat_of_failed_fetch_is_unavailable() {
        let mut provider = FakeProvider::from_test_data().with_second_subnet();
        provider.vcns.clear();
        provider.internet_gateways.clear();
        provider.security_lists.remove(SL2_ID);

        let topology = resolve_topology(&provider, INSTANCE_ID).expect("Error resolving");
        assert_eq!(provider.call_count("get_vcn"), 1);
        assert_eq!(provider.call_count("get_security_list"), 2);

        let detail = topology.subnets[1].detail.as_ref().expect("second subnet");
        assert!(matches!(
            detail.vcn,
            Section::Repeated { available: false, .. }
        ));
        assert!(matches!(
            detail.internet_gateways,
            Section::Repeated { available: false, .. }
        ));
        assert!(matches!(
            detail.security_lists[0].security_list,
            Section::Repeated { ref id, available: false } if id == SL2_ID
        ));
    }

    #[test]
    fn test_test_data_keeps_rule_order() {
        let provider = FakeProvider::from_test_data();
        let list: &SecurityList = &provider.security_lists[SL1_ID];
        assert_eq!(list.ingress_security_rules.len(), 2);
        assert_eq!(list.ingress_security_rules[0].protocol.as_deref(), Some("6"));
        let vcn: &Vcn = &provider.vcns[VCN_ID];
        assert_eq!(vcn.cidrs(), vec!["10.0.0.0/16"]);
    }
}
