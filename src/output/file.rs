//! Report file naming and writing.

use crate::config;
use crate::error::ReportError;
use crate::oci::ocid;
use std::path::{Path, PathBuf};

/// Default report path for an instance, derived only from its OCID.
pub fn default_output_path(instance_id: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}{}.txt",
        config::REPORT_FILE_PREFIX,
        ocid::short_suffix(instance_id, config::REPORT_FILE_ID_CHARS)
    ))
}

/// Write the rendered report to `path`.
pub fn write_report(path: &Path, text: &str) -> Result<(), ReportError> {
    std::fs::write(path, text).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
