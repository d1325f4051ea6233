//! Report rendering.
//!
//! Turns a [`Topology`] into the text document. Section order is fixed:
//! instance, vNICs, subnets (VCN, internet gateways, route table, security
//! lists), NSGs, reachability checklist. Rendering makes no provider calls
//! and gives identical output for identical input.

use super::rules::{format_group_rule, format_route_rule, format_security_rule};
use super::terminal::{format_field, join_or_none, name_or_id, or_none, yes_no};
use crate::config;
use crate::models::{
    Direction, Instance, InternetGateway, PublicAddress, RouteTable, Section, SecurityGroupNode,
    SecurityList, SecurityListNode, SecurityRule, SubnetDetail, SubnetNode, Topology, Vcn,
    VnicNode,
};

/// Static guidance closing the report. References no topology data.
const GUIDANCE: [&str; 5] = [
    "Before testing connectivity, verify:",
    "- An ingress rule (security list or NSG) allows the port from your source CIDR: 22/tcp for SSH, 80/443 tcp for web.",
    "- The subnet route table sends 0.0.0.0/0 to an internet gateway for public access, or to a NAT gateway for outbound only.",
    "- The host firewall on the instance (firewalld or iptables) also allows the port.",
    "- Without a public IP the instance is reachable only privately (VPN, bastion, peering) or through a load balancer in a public subnet.",
];

/// Accumulates report lines.
#[derive(Default)]
struct ReportText {
    lines: Vec<String>,
}

impl ReportText {
    fn line<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    fn field<T: ToString>(&mut self, label: &str, value: T) {
        self.lines.push(format_field(label, value));
    }

    /// Markdown-style heading, preceded by a blank line unless first.
    fn heading(&mut self, level: usize, title: &str) {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.lines.push(format!("{} {title}", "#".repeat(level)));
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Render the full report.
pub fn render_report(topology: &Topology) -> String {
    let mut out = ReportText::default();
    out.heading(1, "OCI Network Report");

    render_instance(&mut out, &topology.instance);

    out.heading(2, "vNICs");
    for (i, node) in topology.vnics.iter().enumerate() {
        render_vnic(&mut out, i + 1, node);
    }

    for node in &topology.subnets {
        render_subnet(&mut out, node);
    }

    out.heading(2, "Network Security Groups");
    if topology.security_groups.is_empty() {
        out.line(config::NONE);
    }
    for node in &topology.security_groups {
        render_security_group(&mut out, node);
    }

    render_checklist(&mut out, &topology.vnics);
    out.finish()
}

fn render_instance(out: &mut ReportText, instance: &Instance) {
    out.heading(2, "Instance");
    out.field("Name", or_none(instance.display_name.as_deref()));
    out.field("OCID", &instance.id);
    out.field("State", or_none(instance.lifecycle_state.as_deref()));
    out.field("Shape", or_none(instance.shape.as_deref()));
    out.field(
        "Availability Domain",
        or_none(instance.availability_domain.as_deref()),
    );
    out.field("Fault Domain", or_none(instance.fault_domain.as_deref()));
    out.field("Region", or_none(instance.region.as_deref()));
    out.field("Compartment", or_none(instance.compartment_id.as_deref()));
}

fn render_vnic(out: &mut ReportText, index: usize, node: &VnicNode) {
    let vnic = &node.vnic;
    out.heading(
        3,
        &format!(
            "vNIC {index}: {}",
            name_or_id(vnic.display_name.as_deref(), &vnic.id)
        ),
    );
    out.field("OCID", &vnic.id);
    out.field("Primary", yes_no(vnic.is_primary));
    out.field("Hostname Label", or_none(vnic.hostname_label.as_deref()));
    out.field("MAC Address", or_none(vnic.mac_address.as_deref()));
    out.field("Private IP", or_none(vnic.private_ip.as_deref()));
    out.field("Public IP", or_none(node.public_address.address()));
    out.field("Public IP Source", public_address_source(&node.public_address));
    out.field("Subnet", or_none(vnic.subnet_id.as_deref()));
    out.field("NSGs", join_or_none(&vnic.nsg_ids));
}

fn public_address_source(address: &PublicAddress) -> String {
    match address {
        PublicAddress::Direct(_) => "vNIC record".to_string(),
        PublicAddress::Bound { lifetime, .. } => format!(
            "public IP resource ({})",
            or_none(lifetime.as_deref())
        ),
        PublicAddress::Absent => config::NONE.to_string(),
    }
}

fn render_subnet(out: &mut ReportText, node: &SubnetNode) {
    let detail = match &node.detail {
        Ok(detail) => detail,
        Err(_) => {
            out.heading(2, &format!("Subnet: {}", node.subnet_id));
            out.line(config::UNAVAILABLE);
            return;
        }
    };

    let subnet = &detail.subnet;
    out.heading(
        2,
        &format!(
            "Subnet: {}",
            name_or_id(subnet.display_name.as_deref(), &subnet.id)
        ),
    );
    out.field("OCID", &subnet.id);
    out.field("CIDR", or_none(subnet.cidr_block.as_deref()));
    out.field(
        "Availability Domain",
        or_none(subnet.availability_domain.as_deref()),
    );
    out.field("VCN", or_none(subnet.vcn_id.as_deref()));
    out.field("Route Table", or_none(subnet.route_table_id.as_deref()));
    out.field("DHCP Options", or_none(subnet.dhcp_options_id.as_deref()));
    out.field(
        "Public IPs on vNICs",
        match subnet.prohibit_public_ip_on_vnic {
            Some(true) => "prohibited",
            Some(false) => "allowed",
            None => config::NONE,
        },
    );
    out.field("Security Lists", join_or_none(&subnet.security_list_ids));

    render_vcn(out, &detail.vcn);
    render_internet_gateways(out, &detail.internet_gateways);
    render_route_table(out, detail);
    render_security_lists(out, &detail.security_lists);
}

fn render_vcn(out: &mut ReportText, vcn: &Section<Vcn>) {
    match vcn {
        Section::Shown(Ok(vcn)) => {
            out.heading(
                3,
                &format!("VCN: {}", name_or_id(vcn.display_name.as_deref(), &vcn.id)),
            );
            out.field("OCID", &vcn.id);
            out.field("CIDR Blocks", join_or_none(&vcn.cidrs()));
        }
        Section::Shown(Err(_)) | Section::Repeated { available: false, .. } => {
            out.heading(3, "VCN");
            out.line(config::UNAVAILABLE);
        }
        Section::Repeated { id, available: true } => {
            out.heading(3, "VCN");
            out.line(format!("{id} {}", config::SHOWN_ABOVE));
        }
        Section::Missing => {
            out.heading(3, "VCN");
            out.line(config::NONE);
        }
    }
}

fn render_internet_gateways(out: &mut ReportText, gateways: &Section<Vec<InternetGateway>>) {
    out.heading(3, "Internet Gateways");
    match gateways {
        Section::Shown(Ok(gateways)) if gateways.is_empty() => out.line(config::NONE),
        Section::Shown(Ok(gateways)) => {
            for gateway in gateways {
                out.line(format!(
                    "- {} ({}) enabled: {}",
                    name_or_id(gateway.display_name.as_deref(), &gateway.id),
                    gateway.id,
                    yes_no(gateway.is_enabled)
                ));
            }
        }
        Section::Shown(Err(_)) | Section::Repeated { available: false, .. } => {
            out.line(config::UNAVAILABLE)
        }
        Section::Repeated { id, available: true } => {
            out.line(format!("see VCN {id} {}", config::SHOWN_ABOVE))
        }
        Section::Missing => out.line(config::NONE),
    }
}

fn render_route_table(out: &mut ReportText, detail: &SubnetDetail) {
    let route_table: &Section<RouteTable> = &detail.route_table;
    match route_table {
        Section::Shown(Ok(table)) => {
            out.heading(
                3,
                &format!(
                    "Route Table: {}",
                    name_or_id(table.display_name.as_deref(), &table.id)
                ),
            );
            out.field("OCID", &table.id);
            if table.route_rules.is_empty() {
                out.line(config::NONE);
            }
            for rule in &table.route_rules {
                out.line(format_route_rule(rule));
            }
        }
        Section::Shown(Err(_)) => {
            out.heading(
                3,
                &format!(
                    "Route Table: {}",
                    or_none(detail.subnet.route_table_id.as_deref())
                ),
            );
            out.line(config::UNAVAILABLE);
        }
        Section::Repeated { id, available } => {
            out.heading(3, &format!("Route Table: {id}"));
            out.line(if *available {
                config::SHOWN_ABOVE
            } else {
                config::UNAVAILABLE
            });
        }
        Section::Missing => {
            out.heading(3, "Route Table");
            out.line(config::NONE);
        }
    }
}

fn render_security_lists(out: &mut ReportText, lists: &[SecurityListNode]) {
    if lists.is_empty() {
        out.heading(3, "Security Lists");
        out.line(config::NONE);
        return;
    }
    for node in lists {
        match &node.security_list {
            Section::Shown(Ok(list)) => render_security_list(out, list),
            Section::Shown(Err(_)) | Section::Repeated { available: false, .. } => {
                out.heading(3, &format!("Security List: {}", node.security_list_id));
                out.line(config::UNAVAILABLE);
            }
            Section::Repeated { id, available: true } => {
                out.heading(3, &format!("Security List: {id}"));
                out.line(config::SHOWN_ABOVE);
            }
            Section::Missing => {
                out.heading(3, &format!("Security List: {}", node.security_list_id));
                out.line(config::NONE);
            }
        }
    }
}

fn render_security_list(out: &mut ReportText, list: &SecurityList) {
    out.heading(
        3,
        &format!(
            "Security List: {}",
            name_or_id(list.display_name.as_deref(), &list.id)
        ),
    );
    out.field("OCID", &list.id);
    render_rules(out, "Ingress", &list.ingress_security_rules, Direction::Ingress);
    render_rules(out, "Egress", &list.egress_security_rules, Direction::Egress);
}

fn render_rules(out: &mut ReportText, title: &str, rules: &[SecurityRule], direction: Direction) {
    out.line(format!("{title}:"));
    if rules.is_empty() {
        out.line(config::NONE);
    }
    for rule in rules {
        out.line(format_security_rule(rule, direction));
    }
}

fn render_security_group(out: &mut ReportText, node: &SecurityGroupNode) {
    let group = match &node.security_group {
        Ok(group) => group,
        Err(_) => {
            out.heading(3, &format!("NSG: {}", node.security_group_id));
            out.line(config::UNAVAILABLE);
            return;
        }
    };
    out.heading(
        3,
        &format!("NSG: {}", name_or_id(group.display_name.as_deref(), &group.id)),
    );
    out.field("OCID", &group.id);
    out.line("Rules:");
    if group.rules.is_empty() {
        out.line(config::NONE);
    }
    for rule in &group.rules {
        out.line(format_group_rule(rule));
    }
}

fn render_checklist(out: &mut ReportText, vnics: &[VnicNode]) {
    out.heading(2, "Reachability Checklist");
    for (i, node) in vnics.iter().enumerate() {
        out.line(format!(
            "- vNIC {}: private {}, public {}",
            i + 1,
            or_none(node.vnic.private_ip.as_deref()),
            or_none(node.public_address.address())
        ));
    }
    out.line("");
    for line in GUIDANCE {
        out.line(line);
    }
}
