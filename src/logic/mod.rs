//! Logic Module - Simulation Engines
//!
//! Engines behind the dashboard core:
//! - `fleet/` - bin registry (synthetic fleet state + delta updates)
//! - `classify/` - waste classifier (simulated Dirichlet confidences)
//! - `history` - append-ordered classification log
//! - `analytics` - derived summary statistics
//! - `state` / `scheduler` - session state object and auto-refresh loop

pub mod analytics;
pub mod classify;
pub mod config;
pub mod error;
pub mod fleet;
pub mod history;
pub mod scheduler;
pub mod state;
