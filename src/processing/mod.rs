//! Topology resolution logic.
//!
//! This module turns provider records into the report's topology graph:
//! - [`dedup`] - First-seen de-duplication of subnet and NSG ids
//! - [`public_ip`] - Two-source public address resolution
//! - [`resolver`] - The single-pass resolution of an instance's network

mod dedup;
mod public_ip;
mod resolver;

// Re-export public functions
pub use dedup::{unique_security_group_ids, unique_subnet_ids};
pub use public_ip::resolve_public_address;
pub use resolver::resolve_topology;
