//! Auto-Refresh Scheduler
//!
//! Recurring timer task re-applying the simulated sensor sweep on a fixed
//! interval. Runs a current-thread tokio runtime on a dedicated thread; the
//! user-facing auto-refresh toggle gates the work without killing the loop,
//! and the returned handle stops the thread at session teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::logic::state::AppState;

pub struct RefreshHandle {
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Signal the loop and wait for the thread to exit
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Start the background refresh loop for this session
pub fn start(state: Arc<AppState>) -> RefreshHandle {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();
    let interval_secs = state.config().refresh_interval_seconds.max(1);

    let join = std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime for refresh loop");

        rt.block_on(async move {
            log::info!("Auto-refresh loop started ({}s interval)", interval_secs);
            let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }
                if !state.auto_refresh_enabled() {
                    continue;
                }

                let mut rng = rand::thread_rng();
                state.fleet().apply_delta_update(&mut rng);
                state.note_refresh();
                log::debug!("Refresh #{} applied", state.refreshes_applied());
            }

            log::info!("Auto-refresh loop stopped");
        });
    });

    RefreshHandle {
        stop,
        join: Some(join),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::config::DashboardConfig;

    #[test]
    fn disabled_flag_gates_refreshes_and_stop_terminates() {
        let config = DashboardConfig {
            refresh_interval_seconds: 1,
            ..DashboardConfig::default()
        };
        let state = Arc::new(AppState::with_seed(config, 3));
        state.set_auto_refresh(false);

        let handle = start(state.clone());
        std::thread::sleep(Duration::from_millis(100));
        handle.stop();

        assert_eq!(state.refreshes_applied(), 0);
    }
}
