//! Activity sampling
//!
//! Decides, for one session record and one poll window, whether the
//! session's terminal saw input or output and therefore earns a report line.
//!
//! On a terminal device the access time advances whenever a process reads
//! from it (the user typed something) and the modification time advances
//! whenever a process writes to it (the terminal displayed output). Both
//! carry one-second resolution, which is the floor for poll intervals.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::models::{ActivityReport, PollWindow, SessionRecord, WatchConfig};

/// Resolve a registry terminal line to its device path.
/// Pure path construction; the filesystem is not consulted.
pub fn resolve_device_path(dev_root: &Path, terminal_id: &str) -> PathBuf {
    dev_root.join(terminal_id)
}

/// The activity predicate: input activity is a last-read timestamp at or
/// after the window start, output activity a last-write timestamp at or
/// after it. The boundary is inclusive. With neither watch flag set, nothing
/// ever matches; that is a valid configuration, not an error.
pub fn activity_matches(
    config: &WatchConfig,
    window_start_secs: i64,
    last_read_secs: i64,
    last_write_secs: i64,
) -> bool {
    (config.watch_input && last_read_secs >= window_start_secs)
        || (config.watch_output && last_write_secs >= window_start_secs)
}

/// Evaluate one session against the current poll window.
///
/// `self_tty` is the device connected to the monitor's own stdout. The
/// session owning it never reports: this process keeps that terminal
/// permanently active, and reporting it would echo forever. A device that
/// cannot be queried (vanished mid-poll, permission denied) counts as idle
/// for this window only; monitoring of the remaining sessions continues.
pub fn sample_session(
    record: &SessionRecord,
    window: &PollWindow,
    config: &WatchConfig,
    self_tty: Option<&Path>,
    dev_root: &Path,
) -> Option<ActivityReport> {
    let device_path = resolve_device_path(dev_root, &record.terminal_id);

    if self_tty == Some(device_path.as_path()) {
        return None;
    }

    let (last_read, last_write) = device_times(&device_path)?;

    if !activity_matches(config, window.start_secs, last_read, last_write) {
        return None;
    }

    if !config.watches_user(&record.username) {
        return None;
    }

    Some(ActivityReport {
        window_label: window.label.clone(),
        terminal_id: record.terminal_id.clone(),
        username: record.username.clone(),
    })
}

/// Device timestamps in whole unix seconds: (last_read, last_write).
/// Any query failure yields `None` and is logged at debug level only.
fn device_times(path: &Path) -> Option<(i64, i64)> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            debug!("cannot stat {}: {}", path.display(), err);
            return None;
        }
    };
    match (metadata.accessed(), metadata.modified()) {
        (Ok(accessed), Ok(modified)) => Some((unix_secs(accessed), unix_secs(modified))),
        _ => {
            debug!("no timestamps for {}", path.display());
            None
        }
    }
}

fn unix_secs(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    }
}
