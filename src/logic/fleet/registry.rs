//! Bin Registry
//!
//! Generates the synthetic fleet and applies simulated sensor updates.
//! All randomness comes through an injected `Rng` so tests can fix seeds.

use std::ops::RangeInclusive;

use chrono::{Duration, Utc};
use rand::Rng;

use crate::constants::{
    FILL_DELTA_MAX, FILL_DELTA_MIN, INITIAL_FILL_MAX, INITIAL_FILL_MIN, INITIAL_TEMP_MAX,
    INITIAL_TEMP_MIN, LAST_COLLECTION_MAX_HOURS, LAST_COLLECTION_MIN_HOURS, MAP_LAT_ORIGIN,
    MAP_LON_ORIGIN, MAP_SPAN_DEG,
};
use crate::logic::error::{CoreError, CoreResult};

use super::types::{Bin, BinStatus, FleetSummary, GeoPoint};

/// Owns the fleet of bin records
#[derive(Debug, Clone, Default)]
pub struct BinRegistry {
    bins: Vec<Bin>,
}

impl BinRegistry {
    /// Create `count` synthetic bins. A non-positive count yields an empty
    /// fleet rather than an error.
    pub fn initialize(count: i32, rng: &mut impl Rng) -> Self {
        let count = count.max(0) as usize;
        let now = Utc::now();

        let bins = (0..count)
            .map(|i| {
                // Temperature sampled in tenths so one-decimal rounding cannot
                // push a value up to the open upper bound.
                let temp_tenths: i32 = rng.gen_range(
                    (INITIAL_TEMP_MIN * 10.0) as i32..(INITIAL_TEMP_MAX * 10.0) as i32,
                );
                let hours_ago = rng.gen_range(LAST_COLLECTION_MIN_HOURS..=LAST_COLLECTION_MAX_HOURS);

                Bin {
                    id: format!("BIN_{i:03}"),
                    fill_level: rng.gen_range(INITIAL_FILL_MIN..=INITIAL_FILL_MAX),
                    temperature: f64::from(temp_tenths) / 10.0,
                    location: GeoPoint {
                        lat: MAP_LAT_ORIGIN + rng.gen::<f64>() * MAP_SPAN_DEG,
                        lon: MAP_LON_ORIGIN + rng.gen::<f64>() * MAP_SPAN_DEG,
                    },
                    last_collection: now - Duration::hours(hours_ago),
                    status: BinStatus::Active,
                }
            })
            .collect();

        log::info!("Fleet initialized with {} bins", count);
        Self { bins }
    }

    /// Apply one simulated sensor update with the default delta range
    pub fn apply_delta_update(&mut self, rng: &mut impl Rng) {
        self.apply_delta_in(FILL_DELTA_MIN..=FILL_DELTA_MAX, rng);
    }

    /// Apply one simulated sensor update: every bin gets an integer delta
    /// sampled from `range`, clamped so fill stays within [0, 100]. Touches
    /// nothing but `fill_level`.
    pub fn apply_delta_in(&mut self, range: RangeInclusive<i32>, rng: &mut impl Rng) {
        for bin in &mut self.bins {
            let delta = rng.gen_range(range.clone());
            bin.fill_level = (bin.fill_level + delta).clamp(0, 100);
        }
    }

    /// Headline metrics. Empty fleet returns zeroed defaults, never errors.
    pub fn summary(&self) -> FleetSummary {
        if self.bins.is_empty() {
            return FleetSummary::default();
        }

        let n = self.bins.len() as f64;
        FleetSummary {
            active_count: self.bins.iter().filter(|b| b.status.is_active()).count(),
            avg_fill: self.bins.iter().map(|b| f64::from(b.fill_level)).sum::<f64>() / n,
            critical_count: self.bins.iter().filter(|b| b.is_critical()).count(),
            avg_temperature: self.bins.iter().map(|b| b.temperature).sum::<f64>() / n,
        }
    }

    /// Emptying event: fill drops to 0 and `last_collection` is stamped now
    pub fn record_collection(&mut self, id: &str) -> CoreResult<()> {
        let bin = self.find_mut(id)?;
        bin.fill_level = 0;
        bin.last_collection = Utc::now();
        log::info!("Bin {} collected", id);
        Ok(())
    }

    /// Removal/reactivation toggle
    pub fn set_status(&mut self, id: &str, status: BinStatus) -> CoreResult<()> {
        let bin = self.find_mut(id)?;
        bin.status = status;
        Ok(())
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    fn find_mut(&mut self, id: &str) -> CoreResult<&mut Bin> {
        self.bins
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| CoreError::UnknownBin { id: id.to_string() })
    }
}

// ============================================================================
// TESTS
// ============================================================================
