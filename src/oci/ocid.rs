//! Oracle Cloud identifier (OCID) helpers.
//!
//! OCIDs look like `ocid1.<resource-type>.<realm>.[region][.future-use].<unique-id>`.

use crate::error::ReportError;
use regex::Regex;
use std::sync::OnceLock;

static INSTANCE_OCID_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_instance_ocid_regex() -> &'static Regex {
    INSTANCE_OCID_REGEX.get_or_init(|| {
        Regex::new(r"^ocid1\.instance\.[a-z0-9]+\.[a-z0-9.-]*\.[a-z0-9]+$").expect("Invalid Regex")
    })
}

/// Structural check of an instance OCID. Does not contact the provider.
pub fn validate_instance_id(instance_id: &str) -> Result<(), ReportError> {
    if get_instance_ocid_regex().is_match(instance_id) {
        Ok(())
    } else {
        Err(ReportError::BadInstanceId(instance_id.to_string()))
    }
}

/// The resource-type segment, e.g. `internetgateway` for an internet gateway OCID.
pub fn resource_type(ocid: &str) -> Option<&str> {
    let mut parts = ocid.split('.');
    match (parts.next(), parts.next()) {
        (Some("ocid1"), Some(kind)) if !kind.is_empty() => Some(kind),
        _ => None,
    }
}

/// Human label for a route rule target.
pub fn target_kind(ocid: &str) -> &str {
    match resource_type(ocid) {
        Some("internetgateway") => "internet gateway",
        Some("natgateway") => "NAT gateway",
        Some("servicegateway") => "service gateway",
        Some("drg") => "DRG",
        Some("privateip") => "private IP",
        Some("localpeeringgateway") => "local peering gateway",
        Some(other) => other,
        None => "unknown",
    }
}

/// Trailing `len` characters of the OCID's unique-id segment.
pub fn short_suffix(ocid: &str, len: usize) -> &str {
    let unique = ocid.rsplit('.').next().unwrap_or(ocid);
    match unique.char_indices().rev().nth(len.saturating_sub(1)) {
        Some((start, _)) if len > 0 => &unique[start..],
        _ if len == 0 => "",
        _ => unique,
    }
}
