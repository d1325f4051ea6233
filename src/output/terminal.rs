//! Text formatting helpers.
//!
//! Shared by the report renderer so every field renders the same way,
//! including absent ones.

use crate::config;

/// Width of the label column in `Label: value` lines.
pub const LABEL_WIDTH: usize = 22;

/// Format a `Label: value` line with the value column aligned.
///
/// # Arguments
/// * `label` - The field name, without the colon
/// * `value` - The value to show
///
/// # Returns
/// A left-aligned label padded to [`LABEL_WIDTH`], then the value
pub fn format_field<T: ToString>(label: &str, value: T) -> String {
    let label = format!("{label}:");
    format!("{label:<width$} {value}", width = LABEL_WIDTH, value = value.to_string())
}

/// The value, or the placeholder when absent or blank.
pub fn or_none(value: Option<&str>) -> &str {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(config::NONE)
}

pub fn yes_no(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => config::NONE,
    }
}

/// Comma-separated values, or the placeholder for an empty list.
pub fn join_or_none<S: AsRef<str>>(values: &[S]) -> String {
    if values.is_empty() {
        config::NONE.to_string()
    } else {
        values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

/// Display name when set, else the id.
pub fn name_or_id<'a>(name: Option<&'a str>, id: &'a str) -> &'a str {
    name.filter(|n| !n.trim().is_empty()).unwrap_or(id)
}
