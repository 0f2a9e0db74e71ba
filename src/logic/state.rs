//! Application State
//!
//! Explicit session-state object handed to every command handler. Created at
//! session start, mutated only through the documented commands, dropped at
//! session end. The fleet and the history each sit behind their own lock so
//! read-modify-write on fill levels and history appends stay atomic if a host
//! serves concurrent clients.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants;
use crate::logic::config::DashboardConfig;
use crate::logic::fleet::BinRegistry;
use crate::logic::history::ClassificationHistory;

pub struct AppState {
    config: DashboardConfig,
    fleet: Mutex<BinRegistry>,
    history: Mutex<ClassificationHistory>,
    auto_refresh: AtomicBool,
    refreshes_applied: AtomicU64,
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Fresh session with an entropy-seeded fleet
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_rng(config, &mut StdRng::from_entropy())
    }

    /// Deterministic session for demos and tests
    pub fn with_seed(config: DashboardConfig, seed: u64) -> Self {
        Self::with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: DashboardConfig, rng: &mut StdRng) -> Self {
        let fleet = BinRegistry::initialize(config.bin_count, rng);
        Self {
            config,
            fleet: Mutex::new(fleet),
            history: Mutex::new(ClassificationHistory::new()),
            auto_refresh: AtomicBool::new(constants::is_auto_refresh_enabled()),
            refreshes_applied: AtomicU64::new(0),
            started_at: Utc::now(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn fleet(&self) -> MutexGuard<'_, BinRegistry> {
        self.fleet.lock()
    }

    pub fn history(&self) -> MutexGuard<'_, ClassificationHistory> {
        self.history.lock()
    }

    pub fn auto_refresh_enabled(&self) -> bool {
        self.auto_refresh.load(Ordering::Relaxed)
    }

    pub fn set_auto_refresh(&self, enabled: bool) {
        self.auto_refresh.store(enabled, Ordering::Relaxed);
        log::info!("Auto-refresh {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Bump the refresh counter (one simulated sensor sweep applied)
    pub fn note_refresh(&self) {
        self.refreshes_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn refreshes_applied(&self) -> u64 {
        self.refreshes_applied.load(Ordering::Relaxed)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sessions_start_with_identical_fleets() {
        let a = AppState::with_seed(DashboardConfig::default(), 5);
        let b = AppState::with_seed(DashboardConfig::default(), 5);

        let fa = a.fleet();
        let fb = b.fleet();
        assert_eq!(fa.len(), 20);
        for (x, y) in fa.bins().iter().zip(fb.bins()) {
            assert_eq!(x.fill_level, y.fill_level);
        }
    }

    #[test]
    fn auto_refresh_flag_toggles() {
        let state = AppState::with_seed(DashboardConfig::default(), 1);
        state.set_auto_refresh(false);
        assert!(!state.auto_refresh_enabled());
        state.set_auto_refresh(true);
        assert!(state.auto_refresh_enabled());
    }
}
