//! Fleet Module - Bin Registry
//!
//! Owns the synthetic fleet: initialization, incremental fill updates,
//! collection events, and the fleet summary.

pub mod registry;
pub mod types;

pub use registry::BinRegistry;
pub use types::{Bin, BinStatus, FleetSummary, GeoPoint};
