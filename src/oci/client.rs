//! [`NetworkProvider`] backed by the `oci` command line tool.

use super::cli;
use super::NetworkProvider;
use crate::error::{FetchError, Fetched, ReportError};
use crate::models::{
    Instance, InternetGateway, PrivateIp, PublicIp, RouteTable, SecurityGroup, SecurityList,
    SecurityRule, Subnet, Vcn, Vnic,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The `{"data": ...}` wrapper around every CLI response.
#[derive(Deserialize, Debug)]
struct Envelope<T> {
    data: T,
}

/// Decode a CLI response envelope into `T`.
///
/// `what` names the entity in the error, which also carries the JSON path
/// of the first mismatch.
pub fn parse_data<T: DeserializeOwned>(what: &str, json: &str) -> Fetched<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let envelope: Envelope<T> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            log::trace!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", json);
            FetchError::Parse {
                what: what.to_string(),
                path: e.path().to_string(),
                source: e.into_inner(),
            }
        })?;
    Ok(envelope.data)
}

/// Like [`parse_data`] for list commands, which print nothing when empty.
pub fn parse_list<T: DeserializeOwned>(what: &str, json: &str) -> Fetched<Vec<T>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse_data(what, json)
}

/// Runs `oci` subcommands and decodes their JSON output.
#[derive(Debug, Clone)]
pub struct OciCli {
    program: PathBuf,
    profile: Option<String>,
    region: Option<String>,
}

impl OciCli {
    /// Resolve `bin` on `PATH` (or as a path) and build a client.
    pub fn locate(
        bin: &str,
        profile: Option<String>,
        region: Option<String>,
    ) -> Result<OciCli, ReportError> {
        let program = which::which(bin).map_err(|source| ReportError::ToolMissing {
            tool: bin.to_string(),
            source,
        })?;
        log::info!("Using OCI CLI at {}", program.display());
        Ok(OciCli {
            program,
            profile,
            region,
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn args(&self, words: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        if let Some(region) = &self.region {
            args.push("--region".to_string());
            args.push(region.clone());
        }
        args.push("--output".to_string());
        args.push("json".to_string());
        args
    }

    fn get<T: DeserializeOwned>(&self, what: &str, words: &[&str]) -> Fetched<T> {
        let output = cli::run(&self.program, &self.args(words))?;
        parse_data(what, &output)
    }

    fn list<T: DeserializeOwned>(&self, what: &str, words: &[&str]) -> Fetched<Vec<T>> {
        let output = cli::run(&self.program, &self.args(words))?;
        parse_list(what, &output)
    }
}

impl NetworkProvider for OciCli {
    fn get_instance(&self, instance_id: &str) -> Fetched<Instance> {
        self.get(
            "instance",
            &["compute", "instance", "get", "--instance-id", instance_id],
        )
    }

    fn list_vnics(&self, instance_id: &str, compartment_id: Option<&str>) -> Fetched<Vec<Vnic>> {
        let mut words = vec!["compute", "instance", "list-vnics", "--instance-id", instance_id];
        if let Some(compartment_id) = compartment_id {
            words.extend(["--compartment-id", compartment_id]);
        }
        words.push("--all");
        self.list("vNIC list", &words)
    }

    fn list_public_ips(&self, vnic_id: &str) -> Fetched<Vec<PublicIp>> {
        let private_ips: Vec<PrivateIp> = self.list(
            "private IP list",
            &["network", "private-ip", "list", "--vnic-id", vnic_id, "--all"],
        )?;

        let mut public_ips = Vec::new();
        for private_ip in &private_ips {
            let result: Fetched<PublicIp> = self.get(
                "public IP",
                &[
                    "network",
                    "public-ip",
                    "get",
                    "--private-ip-id",
                    private_ip.id.as_str(),
                ],
            );
            match result {
                Ok(public_ip) => public_ips.push(public_ip),
                Err(e) if e.is_not_found() => {
                    log::debug!("No public IP bound to private IP {}", private_ip.id)
                }
                Err(e) => return Err(e),
            }
        }
        Ok(public_ips)
    }

    fn get_subnet(&self, subnet_id: &str) -> Fetched<Subnet> {
        self.get(
            "subnet",
            &["network", "subnet", "get", "--subnet-id", subnet_id],
        )
    }

    fn get_vcn(&self, vcn_id: &str) -> Fetched<Vcn> {
        self.get("VCN", &["network", "vcn", "get", "--vcn-id", vcn_id])
    }

    fn list_internet_gateways(
        &self,
        compartment_id: &str,
        vcn_id: &str,
    ) -> Fetched<Vec<InternetGateway>> {
        self.list(
            "internet gateway list",
            &[
                "network",
                "internet-gateway",
                "list",
                "--compartment-id",
                compartment_id,
                "--vcn-id",
                vcn_id,
                "--all",
            ],
        )
    }

    fn get_route_table(&self, route_table_id: &str) -> Fetched<RouteTable> {
        self.get(
            "route table",
            &["network", "route-table", "get", "--rt-id", route_table_id],
        )
    }

    fn get_security_list(&self, security_list_id: &str) -> Fetched<SecurityList> {
        self.get(
            "security list",
            &[
                "network",
                "security-list",
                "get",
                "--security-list-id",
                security_list_id,
            ],
        )
    }

    fn get_security_group(&self, security_group_id: &str) -> Fetched<SecurityGroup> {
        let mut group: SecurityGroup = self.get(
            "network security group",
            &["network", "nsg", "get", "--nsg-id", security_group_id],
        )?;
        group.rules = self.list::<SecurityRule>(
            "network security group rules",
            &[
                "network",
                "nsg",
                "rules",
                "list",
                "--nsg-id",
                security_group_id,
                "--all",
            ],
        )?;
        Ok(group)
    }
}
