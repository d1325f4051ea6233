//! One-line renderings of security and route rules.

use super::terminal::or_none;
use crate::config;
use crate::models::{Direction, RouteRule, SecurityRule};
use crate::oci::ocid;

/// Protocol label for an OCI protocol value ("all" or an IANA number).
pub fn protocol_name(protocol: Option<&str>) -> String {
    match protocol.map(str::trim) {
        None | Some("") => config::NONE.to_string(),
        Some(p) if p.eq_ignore_ascii_case("all") => "ALL".to_string(),
        Some("1") => "ICMP".to_string(),
        Some("6") => "TCP".to_string(),
        Some("17") => "UDP".to_string(),
        Some("58") => "ICMPv6".to_string(),
        Some(other) => format!("proto {other}"),
    }
}

/// Render a security rule as `- PROTO [ports] from|to PEER [stateless] (description)`.
///
/// `direction` picks the peer: ingress rules show their source, egress
/// rules their destination.
pub fn format_security_rule(rule: &SecurityRule, direction: Direction) -> String {
    let mut parts = vec![protocol_name(rule.protocol.as_deref())];

    if let Some(icmp) = rule.icmp_options {
        match icmp.code {
            Some(code) => parts.push(format!("type {} code {}", icmp.icmp_type, code)),
            None => parts.push(format!("type {}", icmp.icmp_type)),
        }
    } else if matches!(rule.protocol.as_deref(), Some("6") | Some("17")) {
        match rule.destination_port_range() {
            Some(range) => parts.push(format!("port {range}")),
            None => parts.push("all ports".to_string()),
        }
        let source_ports = rule
            .tcp_options
            .as_ref()
            .or(rule.udp_options.as_ref())
            .and_then(|o| o.source_port_range);
        if let Some(range) = source_ports {
            parts.push(format!("src port {range}"));
        }
    }

    let (word, peer, peer_type) = match direction {
        Direction::Ingress => ("from", &rule.source, &rule.source_type),
        Direction::Egress => ("to", &rule.destination, &rule.destination_type),
    };
    parts.push(format!("{word} {}", or_none(peer.as_deref())));
    if let Some(kind) = peer_type.as_deref().filter(|k| *k != "CIDR_BLOCK") {
        parts.push(format!("[{kind}]"));
    }

    if rule.is_stateless == Some(true) {
        parts.push("[stateless]".to_string());
    }
    if let Some(description) = rule.description.as_deref().filter(|d| !d.trim().is_empty()) {
        parts.push(format!("({description})"));
    }

    format!("- {}", parts.join(" "))
}

/// Render an NSG rule with its direction in front.
///
/// A rule without a direction is treated as egress when it names only a
/// destination, else as ingress.
pub fn format_group_rule(rule: &SecurityRule) -> String {
    let direction = rule.direction.unwrap_or(
        if rule.destination.is_some() && rule.source.is_none() {
            Direction::Egress
        } else {
            Direction::Ingress
        },
    );
    let label = match rule.direction {
        Some(Direction::Ingress) => "INGRESS",
        Some(Direction::Egress) => "EGRESS",
        None => config::NONE,
    };
    let line = format_security_rule(rule, direction);
    format!("- {label} {}", line.trim_start_matches("- "))
}

/// Render a route rule as `- DEST (TYPE) -> TARGET [kind] (description)`.
pub fn format_route_rule(rule: &RouteRule) -> String {
    let destination = or_none(rule.destination());
    let mut line = format!(
        "- {destination} ({}) -> {}",
        or_none(rule.destination_type.as_deref()),
        or_none(rule.network_entity_id.as_deref())
    );
    if let Some(target) = rule.network_entity_id.as_deref() {
        line.push_str(&format!(" [{}]", ocid::target_kind(target)));
    }
    if let Some(description) = rule.description.as_deref().filter(|d| !d.trim().is_empty()) {
        line.push_str(&format!(" ({description})"));
    }
    line
}
