//! Static configuration values.

/// Default name of the provider CLI executable.
pub const DEFAULT_OCI_BIN: &str = "oci";

/// Default log4rs configuration file, relative to the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Prefix of the report file name when no output path is given.
pub const REPORT_FILE_PREFIX: &str = "oci_network_report_";

/// Number of trailing OCID characters used in the default file name.
pub const REPORT_FILE_ID_CHARS: usize = 12;

/// Upper bound on a single CLI response, in bytes.
pub const MAX_RESPONSE_BYTES: usize = 5_000_000;

/// Rendered for a field or section that has no value.
pub const NONE: &str = "(none)";

/// Rendered for a section whose fetch failed.
pub const UNAVAILABLE: &str = "(unavailable)";

/// Rendered where an entity was already shown earlier in the report.
pub const SHOWN_ABOVE: &str = "(shown above)";

// Process exit codes
pub const EXIT_WRITE_FAILED: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_TOOL_MISSING: i32 = 3;
pub const EXIT_BAD_INSTANCE_ID: i32 = 4;
pub const EXIT_INSTANCE_FETCH: i32 = 5;
pub const EXIT_NO_VNICS: i32 = 6;
