//! Dashboard Configuration
//!
//! Static configuration consumed at session start. Defaults come from
//! `constants`; `from_env` applies the environment overrides.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::classify::category::WasteCategory;

/// Named configuration options for one dashboard session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of synthetic bins created at initialization
    pub bin_count: i32,
    /// Auto-refresh cadence in seconds
    pub refresh_interval_seconds: u64,
    /// Ordered waste category names (display labels for the shell)
    pub categories: Vec<String>,
    /// One color per category, same order
    pub category_palette: Vec<String>,
    /// Fill level above which a bin is critical / High priority
    pub high_priority_threshold: i32,
    /// Fill level above which a bin is Medium priority
    pub medium_priority_threshold: i32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bin_count: constants::DEFAULT_BIN_COUNT,
            refresh_interval_seconds: constants::DEFAULT_REFRESH_INTERVAL_SECS,
            categories: WasteCategory::ALL
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            category_palette: WasteCategory::ALL
                .iter()
                .map(|c| c.color().to_string())
                .collect(),
            high_priority_threshold: constants::HIGH_PRIORITY_THRESHOLD,
            medium_priority_threshold: constants::MEDIUM_PRIORITY_THRESHOLD,
        }
    }
}

impl DashboardConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self {
            bin_count: constants::get_bin_count(),
            refresh_interval_seconds: constants::get_refresh_interval(),
            ..Self::default()
        }
    }
}
