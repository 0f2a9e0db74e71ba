//! Fleet Types
//!
//! Data structures only - no registry logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::HIGH_PRIORITY_THRESHOLD;

// ============================================================================
// BIN STATUS
// ============================================================================

/// Whether a bin participates in active-fleet aggregates.
/// Bins are never deleted; toggling status models removal/reactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinStatus {
    Active,
    Inactive,
}

impl BinStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinStatus::Active => "active",
            BinStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, BinStatus::Active)
    }
}

impl std::fmt::Display for BinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// LOCATION
// ============================================================================

/// Fixed installation point of a bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

// ============================================================================
// BIN
// ============================================================================

/// One physical waste receptacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bin {
    /// Stable unique identifier (`BIN_000` style), immutable after creation
    pub id: String,
    /// Fill percentage, always within [0, 100]
    pub fill_level: i32,
    /// Degrees C, informational only
    pub temperature: f64,
    /// Immutable installation point
    pub location: GeoPoint,
    /// Most recent emptying event
    pub last_collection: DateTime<Utc>,
    pub status: BinStatus,
}

impl Bin {
    /// Critical means over the shared high-priority threshold
    pub fn is_critical(&self) -> bool {
        self.fill_level > HIGH_PRIORITY_THRESHOLD
    }
}

// ============================================================================
// FLEET SUMMARY
// ============================================================================

/// Headline metrics over the fleet. Empty fleet yields all zeros.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetSummary {
    pub active_count: usize,
    pub avg_fill: f64,
    pub critical_count: usize,
    pub avg_temperature: f64,
}
