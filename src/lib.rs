//! Network topology report for an Oracle Cloud compute instance.
//!
//! Resolves the instance's vNICs, subnets, VCNs, gateways, route tables,
//! security lists and NSGs through the `oci` CLI, then writes one text
//! report. Failures below the vNIC list degrade to placeholders instead of
//! aborting the run.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod oci;
pub mod output;
pub mod processing;
#[cfg(test)]
mod tests;

use oci::{NetworkProvider, OciCli};
use std::path::{Path, PathBuf};

pub use args::Args;
pub use error::{FetchError, Fetched, ReportError};

/// Resolve, render and write the report for `instance_id`.
///
/// Nothing is written when resolution fails.
///
/// # Returns
/// * `Ok(PathBuf)` - Where the report was written
/// * `Err` - A fatal error; see [`ReportError::exit_code`]
pub fn generate_report<P>(
    provider: &P,
    instance_id: &str,
    output_path: Option<&Path>,
) -> Result<PathBuf, ReportError>
where
    P: NetworkProvider + ?Sized,
{
    let topology = processing::resolve_topology(provider, instance_id)?;
    let text = output::render_report(&topology);
    let path = output_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| output::default_output_path(instance_id));
    output::write_report(&path, &text)?;
    Ok(path)
}

/// Run with the `oci` CLI as provider.
pub fn run(args: &Args) -> Result<PathBuf, ReportError> {
    let provider = OciCli::locate(&args.oci_bin, args.profile.clone(), args.region.clone())?;
    generate_report(&provider, &args.instance_id, args.output.as_deref())
}
