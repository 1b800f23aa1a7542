//! The polling loop: windowing, interruptible sleep, and the per-iteration
//! enumerate-sample-report pass.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info};

use crate::activity;
use crate::constants::{DEV_ROOT, SHUTDOWN_POLL_MILLIS};
use crate::models::{PollWindow, WatchConfig};
use crate::output;
use crate::sessions;

/// Run the watch loop until the shutdown flag is raised (called from main).
///
/// Each iteration captures a fresh poll window, sleeps out the interval, then
/// scans the session registry and samples every yielded session against the
/// window. The shutdown flag is honored only between iterations: an
/// in-progress pass always runs to completion, so report consumers see whole
/// iterations or nothing. Successive window starts are strictly increasing,
/// since at least a full interval separates captures.
pub fn start_watching(
    config: WatchConfig,
    self_tty: Option<PathBuf>,
    shutdown: Arc<AtomicBool>,
) -> Result<()> {
    info!(
        interval_secs = config.poll_interval.as_secs(),
        "starting terminal activity watch"
    );
    if !config.username_filter.is_empty() {
        info!("limiting reports to: {}", config.username_filter.join(", "));
    }

    let dev_root = Path::new(DEV_ROOT);

    loop {
        let window = PollWindow::open();
        sleep_interruptible(config.poll_interval, &shutdown);

        let records = sessions::enumerate_active_sessions()?;
        debug!(sessions = records.len(), "scanned session registry");

        for record in &records {
            if let Some(report) =
                activity::sample_session(record, &window, &config, self_tty.as_deref(), dev_root)
            {
                output::emit_report(&report, config.ring_bell);
            }
        }

        if shutdown.load(Ordering::SeqCst) {
            break;
        }
    }

    info!("watch stopped");
    Ok(())
}

/// Sleep for the poll interval, returning early once the shutdown flag is
/// raised. The flag is checked at a granularity well below the minimum
/// interval; an early wake is the normal path toward graceful termination.
fn sleep_interruptible(duration: Duration, shutdown: &Arc<AtomicBool>) {
    let deadline = Instant::now() + duration;
    let slice = Duration::from_millis(SHUTDOWN_POLL_MILLIS);
    loop {
        if shutdown.load(Ordering::Relaxed) {
            return;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return;
        }
        thread::sleep(remaining.min(slice));
    }
}
