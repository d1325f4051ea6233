//! Public address resolution for a vNIC.

use crate::models::{PublicAddress, Vnic};
use crate::oci::NetworkProvider;

/// Resolve the vNIC's public address.
///
/// The address on the vNIC record wins and no lookup is made. Otherwise the
/// public IP resources bound to the vNIC are queried. A failed lookup leaves
/// the address absent.
pub fn resolve_public_address<P>(provider: &P, vnic: &Vnic) -> PublicAddress
where
    P: NetworkProvider + ?Sized,
{
    if let Some(address) = vnic.direct_public_ip() {
        return PublicAddress::Direct(address.to_string());
    }

    let public_ips = match provider.list_public_ips(&vnic.id) {
        Ok(public_ips) => public_ips,
        Err(e) => {
            log::warn!("Failed to look up public IPs for vNIC {}: {e}", vnic.id);
            return PublicAddress::Absent;
        }
    };

    let mut bound = public_ips.into_iter().filter_map(|p| {
        let address = p.ip_address.filter(|a| !a.trim().is_empty())?;
        Some(PublicAddress::Bound {
            address,
            lifetime: p.lifetime,
        })
    });
    let Some(first) = bound.next() else {
        return PublicAddress::Absent;
    };
    let extra = bound.count();
    if extra > 0 {
        log::warn!(
            "vNIC {} has {} public IP resources bound; reporting the first returned",
            vnic.id,
            extra + 1
        );
    }
    first
}
