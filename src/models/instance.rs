//! Compute instance record.

use serde::{Deserialize, Serialize};

/// The compute node under inspection, as returned by `compute instance get`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Instance {
    /// Instance OCID.
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// e.g. RUNNING, STOPPED.
    #[serde(default)]
    pub lifecycle_state: Option<String>,
    #[serde(default)]
    pub availability_domain: Option<String>,
    #[serde(default)]
    pub fault_domain: Option<String>,
    #[serde(default)]
    pub compartment_id: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub shape: Option<String>,
}
