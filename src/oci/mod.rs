//! Oracle Cloud provider access.
//!
//! - [`cli`] - Process execution for the `oci` CLI
//! - [`client`] - [`OciCli`], the CLI-backed [`NetworkProvider`]
//! - [`ocid`] - Identifier shape checks and helpers
//! - [`provider`] - The read-only [`NetworkProvider`] trait

mod cli;
mod client;
pub mod ocid;
mod provider;

// Re-export public types and functions
pub use client::{parse_data, parse_list, OciCli};
pub use provider::NetworkProvider;
