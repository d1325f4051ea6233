//! First-seen de-duplication of referenced ids.

use crate::models::Vnic;
use itertools::Itertools;

/// Distinct subnet ids across `vnics`, in first-seen order.
pub fn unique_subnet_ids<'a, I>(vnics: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Vnic>,
{
    vnics
        .into_iter()
        .filter_map(|v| v.subnet_id.as_deref())
        .filter(|id| !id.is_empty())
        .unique()
        .map(str::to_string)
        .collect()
}

/// Distinct NSG ids across `vnics`, in first-seen order.
pub fn unique_security_group_ids<'a, I>(vnics: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Vnic>,
{
    vnics
        .into_iter()
        .flat_map(|v| v.nsg_ids.iter().map(String::as_str))
        .filter(|id| !id.is_empty())
        .unique()
        .map(str::to_string)
        .collect()
}
