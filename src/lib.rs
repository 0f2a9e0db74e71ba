//! Smart Waste Monitoring Core
//!
//! Bin state & classification simulation engine behind the waste-management
//! dashboard. The UI shell (tabs, charts, map) lives outside this crate and
//! talks to [`api::commands`] against an explicit [`AppState`].
//!
//! ## Architecture
//! - `logic/` - engines: fleet registry, classifier, history, analytics
//! - `api/` - command handlers + DTOs for the presentation shell

pub mod api;
pub mod constants;
pub mod logic;

pub use logic::config::DashboardConfig;
pub use logic::error::CoreError;
pub use logic::state::AppState;
