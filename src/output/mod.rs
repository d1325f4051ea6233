//! Report output.
//!
//! This module handles rendering and writing the report:
//! - [`report`] - Topology to text rendering
//! - [`rules`] - Security and route rule lines
//! - [`terminal`] - Field formatting helpers
//! - [`file`] - Output path and file writing

mod file;
mod report;
mod rules;
mod terminal;

pub use file::{default_output_path, write_report};
pub use report::render_report;
pub use terminal::format_field;
