//! Command line arguments.

use crate::config;
use clap::Parser;
use std::path::PathBuf;

/// Write a network topology report for an OCI compute instance.
#[derive(Parser, Debug, Clone)]
#[command(name = "oci-network-report", version, about)]
pub struct Args {
    /// OCID of the compute instance (ocid1.instance.<realm>.<region>.<id>)
    pub instance_id: String,

    /// Report file [default: oci_network_report_<id-suffix>.txt]
    pub output: Option<PathBuf>,

    /// OCI CLI executable
    #[arg(long, env = "OCI_CLI_BIN", default_value = config::DEFAULT_OCI_BIN)]
    pub oci_bin: String,

    /// OCI CLI config profile passed to every call
    #[arg(long, env = "OCI_REPORT_PROFILE")]
    pub profile: Option<String>,

    /// Region passed to every call
    #[arg(long, env = "OCI_REPORT_REGION")]
    pub region: Option<String>,

    /// log4rs configuration file
    #[arg(long, env = "OCI_REPORT_LOG4RS", default_value = config::DEFAULT_LOG_CONFIG)]
    pub log_config: PathBuf,
}
