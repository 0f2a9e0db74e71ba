//! Commands - API for the Presentation Shell
//!
//! The only mutations the shell can trigger: refresh the simulated data,
//! classify an upload, toggle auto-refresh, record a collection, toggle bin
//! status. Everything else is a read-only snapshot. Errors cross this
//! boundary as strings; the engine's typed errors stay inside `logic`.

use serde::{Deserialize, Serialize};

use crate::constants::{APP_VERSION, MODEL_ACCURACY_PCT, MODEL_NAME};
use crate::logic::analytics::{self, priority_bucket, AnalyticsSnapshot};
use crate::logic::classify::{ClassificationResult, ImageUpload, WasteClassifier};
use crate::logic::fleet::{Bin, BinStatus};
use crate::logic::state::AppState;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One bin row for the live status table / map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinInfo {
    pub id: String,
    pub fill_level: i32,
    pub temperature: f64,
    pub lat: f64,
    pub lon: f64,
    pub last_collection: String,
    pub status: String,
    pub priority: String,
}

impl From<&Bin> for BinInfo {
    fn from(bin: &Bin) -> Self {
        Self {
            id: bin.id.clone(),
            fill_level: bin.fill_level,
            temperature: bin.temperature,
            lat: bin.location.lat,
            lon: bin.location.lon,
            last_collection: bin.last_collection.to_rfc3339(),
            status: bin.status.to_string(),
            priority: priority_bucket(bin).to_string(),
        }
    }
}

/// Headline metrics strip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSummaryInfo {
    pub total_bins: usize,
    pub active_bins: usize,
    pub avg_fill: f64,
    pub critical_bins: usize,
    pub avg_temperature: f64,
}

/// One per-category score row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,
    pub color: String,
}

/// One classification for the results panel / history table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationInfo {
    pub id: String,
    pub image: String,
    pub category: String,
    pub confidence: f64,
    pub all_scores: Vec<CategoryScore>,
    pub timestamp: String,
}

impl From<&ClassificationResult> for ClassificationInfo {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            id: result.id.to_string(),
            image: result.source_image.clone(),
            category: result.category.to_string(),
            confidence: result.confidence,
            all_scores: result
                .all_scores
                .iter()
                .map(|(cat, score)| CategoryScore {
                    category: cat.to_string(),
                    score: *score,
                    color: cat.color().to_string(),
                })
                .collect(),
            timestamp: result.timestamp.to_rfc3339(),
        }
    }
}

// ============================================================================
// MUTATING COMMANDS
// ============================================================================

/// Apply one simulated sensor sweep and return the refreshed summary
pub fn refresh_simulated_data(state: &AppState) -> Result<FleetSummaryInfo, String> {
    let mut rng = rand::thread_rng();
    let mut fleet = state.fleet();
    fleet.apply_delta_update(&mut rng);
    state.note_refresh();

    let summary = fleet.summary();
    Ok(FleetSummaryInfo {
        total_bins: fleet.len(),
        active_bins: summary.active_count,
        avg_fill: summary.avg_fill,
        critical_bins: summary.critical_count,
        avg_temperature: summary.avg_temperature,
    })
}

/// Validate and classify an upload, recording the result. A classifier
/// failure propagates to the caller and leaves the history untouched.
pub fn classify_image(
    state: &AppState,
    classifier: &mut dyn WasteClassifier,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<ClassificationInfo, String> {
    let upload = ImageUpload::new(filename, bytes).map_err(|e| e.to_string())?;
    let result = classifier.classify(&upload).map_err(|e| e.to_string())?;

    let info = ClassificationInfo::from(&result);
    state.history().record(result);
    Ok(info)
}

/// Toggle the auto-refresh loop's gate
pub fn toggle_auto_refresh(state: &AppState, enabled: bool) -> Result<bool, String> {
    state.set_auto_refresh(enabled);
    Ok(enabled)
}

/// Record an emptying event on one bin
pub fn record_collection(state: &AppState, bin_id: &str) -> Result<bool, String> {
    state
        .fleet()
        .record_collection(bin_id)
        .map(|_| true)
        .map_err(|e| e.to_string())
}

/// Deactivate or reactivate one bin
pub fn set_bin_active(state: &AppState, bin_id: &str, active: bool) -> Result<bool, String> {
    let status = if active {
        BinStatus::Active
    } else {
        BinStatus::Inactive
    };
    state
        .fleet()
        .set_status(bin_id, status)
        .map(|_| true)
        .map_err(|e| e.to_string())
}

// ============================================================================
// READ-ONLY SNAPSHOTS
// ============================================================================

/// Full bin list for the table and the map
pub fn get_bins(state: &AppState) -> Result<Vec<BinInfo>, String> {
    Ok(state.fleet().bins().iter().map(BinInfo::from).collect())
}

pub fn get_fleet_summary(state: &AppState) -> Result<FleetSummaryInfo, String> {
    let fleet = state.fleet();
    let summary = fleet.summary();
    Ok(FleetSummaryInfo {
        total_bins: fleet.len(),
        active_bins: summary.active_count,
        avg_fill: summary.avg_fill,
        critical_bins: summary.critical_count,
        avg_temperature: summary.avg_temperature,
    })
}

/// Most recent classifications, newest first (shell shows 10 by default)
pub fn get_recent_classifications(
    state: &AppState,
    limit: Option<usize>,
) -> Result<Vec<ClassificationInfo>, String> {
    let limit = limit.unwrap_or(10);
    Ok(state
        .history()
        .most_recent(limit)
        .iter()
        .map(ClassificationInfo::from)
        .collect())
}

/// Analytics tab payload, recomputed on demand
pub fn get_analytics(state: &AppState) -> Result<AnalyticsSnapshot, String> {
    let mut rng = rand::thread_rng();
    let fleet = state.fleet();
    let history = state.history();
    Ok(analytics::snapshot(&fleet, &history, &mut rng))
}

/// Loosely-shaped status blob for the sidebar
pub fn get_engine_status(state: &AppState) -> Result<serde_json::Value, String> {
    Ok(serde_json::json!({
        "version": APP_VERSION,
        "model_name": MODEL_NAME,
        "model_accuracy_pct": MODEL_ACCURACY_PCT,
        "bin_count": state.fleet().len(),
        "classifications": state.history().len(),
        "auto_refresh": state.auto_refresh_enabled(),
        "refreshes_applied": state.refreshes_applied(),
        "uptime_secs": state.uptime_secs(),
        "started_at": state.started_at().to_rfc3339(),
    }))
}

// ============================================================================
// TESTS
// ============================================================================
