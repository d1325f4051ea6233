//! Error types.
//!
//! Two tiers:
//! - [`FetchError`] - a single provider read failed. The entity is rendered
//!   as unavailable and the run continues.
//! - [`ReportError`] - the run cannot produce a report. Each variant maps to
//!   its own process exit code.

use crate::config;
use std::path::PathBuf;
use thiserror::Error;

/// Result of fetching one entity from the provider.
pub type Fetched<T> = Result<T, FetchError>;

/// A failed provider read.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}: {stderr}")]
    Command {
        command: String,
        status: String,
        stderr: String,
    },
    #[error("{what} not found")]
    NotFound { what: String },
    #[error("response too large: {len} bytes from `{command}`")]
    TooLarge { command: String, len: usize },
    #[error("invalid UTF-8 in output of `{command}`")]
    Utf8 { command: String },
    #[error("unexpected {what} JSON at path '{path}': {source}")]
    Parse {
        what: String,
        path: String,
        source: serde_json::Error,
    },
}

impl FetchError {
    /// True when the provider reported the entity as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

/// A failure that aborts the run. No report file is written.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("required tool '{tool}' not found: {source}")]
    ToolMissing { tool: String, source: which::Error },
    #[error("malformed instance OCID '{0}': expected ocid1.instance.<realm>.<region>.<unique-id>")]
    BadInstanceId(String),
    #[error("failed to fetch instance {instance_id}: {source}")]
    InstanceFetch {
        instance_id: String,
        source: FetchError,
    },
    #[error("failed to list vNICs for instance {instance_id}: {source}")]
    VnicList {
        instance_id: String,
        source: FetchError,
    },
    #[error("no interfaces found for instance {0}")]
    NoVnics(String),
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ReportError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::ToolMissing { .. } => config::EXIT_TOOL_MISSING,
            ReportError::BadInstanceId(_) => config::EXIT_BAD_INSTANCE_ID,
            ReportError::InstanceFetch { .. } => config::EXIT_INSTANCE_FETCH,
            ReportError::VnicList { .. } | ReportError::NoVnics(_) => config::EXIT_NO_VNICS,
            ReportError::Write { .. } => config::EXIT_WRITE_FAILED,
        }
    }
}
