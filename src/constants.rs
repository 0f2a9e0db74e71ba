//! Central Configuration Constants
//!
//! Single source of truth for all simulation defaults. The priority thresholds
//! in particular must only ever live here: `critical_count` and the priority
//! buckets both read `HIGH_PRIORITY_THRESHOLD`.

/// Number of bins created at session start
pub const DEFAULT_BIN_COUNT: i32 = 20;

/// Auto-refresh interval (seconds)
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;

/// Fill level above which a bin is critical / High priority
pub const HIGH_PRIORITY_THRESHOLD: i32 = 85;

/// Fill level above which a bin is Medium priority
pub const MEDIUM_PRIORITY_THRESHOLD: i32 = 60;

/// Initial fill level range (inclusive)
pub const INITIAL_FILL_MIN: i32 = 20;
pub const INITIAL_FILL_MAX: i32 = 95;

/// Initial temperature range, degrees C. Sampled in [min, max).
pub const INITIAL_TEMP_MIN: f64 = 20.0;
pub const INITIAL_TEMP_MAX: f64 = 35.0;

/// Per-refresh fill delta range (inclusive)
pub const FILL_DELTA_MIN: i32 = -5;
pub const FILL_DELTA_MAX: i32 = 10;

/// Installation bounding box: origin corner plus span, degrees
pub const MAP_LAT_ORIGIN: f64 = 12.95;
pub const MAP_LON_ORIGIN: f64 = 77.55;
pub const MAP_SPAN_DEG: f64 = 0.1;

/// Hours-since-last-collection range at initialization (inclusive)
pub const LAST_COLLECTION_MIN_HOURS: i64 = 1;
pub const LAST_COLLECTION_MAX_HOURS: i64 = 72;

/// Fixed bucket count for the fill-level histogram
pub const FILL_BUCKET_COUNT: usize = 10;

/// Trend random walk: start value, per-hour step range (inclusive), clamp bounds
pub const TREND_START: i32 = 40;
pub const TREND_STEP_MIN: i32 = -3;
pub const TREND_STEP_MAX: i32 = 5;
pub const TREND_FLOOR: i32 = 20;
pub const TREND_CEIL: i32 = 90;

/// Displayed model info (the simulator stands in for this model)
pub const MODEL_NAME: &str = "ResNet50 (simulated)";
pub const MODEL_ACCURACY_PCT: f64 = 93.2;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get bin count from environment or use default
pub fn get_bin_count() -> i32 {
    std::env::var("WASTEBIN_BIN_COUNT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_BIN_COUNT)
}

/// Get refresh interval from environment or use default
pub fn get_refresh_interval() -> u64 {
    std::env::var("WASTEBIN_REFRESH_INTERVAL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
}

/// Check if auto-refresh starts enabled
pub fn is_auto_refresh_enabled() -> bool {
    std::env::var("WASTEBIN_AUTO_REFRESH")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true)
}
