//! Data models module
//!
//! Defines core data structures:
//! - WatchConfig: immutable runtime configuration built from the CLI
//! - SessionRecord: one active login session from the registry
//! - PollWindow: one sampling interval
//! - ActivityReport: content of one report line

use std::time::Duration;

use chrono::Local;

use crate::constants::WINDOW_LABEL_FORMAT;

/// Filter configuration for the watch loop, constructed once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Time between polls, at least one second
    pub poll_interval: Duration,
    /// Report terminals whose last-read timestamp advanced (user typed)
    pub watch_input: bool,
    /// Report terminals whose last-write timestamp advanced (output shown)
    pub watch_output: bool,
    /// Ring the bell before each report line
    pub ring_bell: bool,
    /// Usernames to restrict reporting to; empty means unrestricted
    pub username_filter: Vec<String>,
}

impl WatchConfig {
    /// True when the username filter admits the given user
    pub fn watches_user(&self, username: &str) -> bool {
        self.username_filter.is_empty() || self.username_filter.iter().any(|u| u == username)
    }
}

/// One active login session as reported by the session registry.
/// Produced fresh on every enumeration pass, never cached across polls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub username: String,
    /// Terminal line relative to the device directory, e.g. "pts/3"
    pub terminal_id: String,
}

/// One sampling interval, bounded by its start and the next window's start
#[derive(Debug, Clone)]
pub struct PollWindow {
    /// Window start in whole unix seconds. Device timestamps equal to it
    /// count as activity within the window.
    pub start_secs: i64,
    /// Human-readable start timestamp, shared by every report line
    /// emitted from this iteration
    pub label: String,
}

impl PollWindow {
    /// Capture a window starting now, from the local clock
    pub fn open() -> Self {
        let now = Local::now();
        Self {
            start_secs: now.timestamp(),
            label: now.format(WINDOW_LABEL_FORMAT).to_string(),
        }
    }
}

/// Content of one emitted report line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityReport {
    pub window_label: String,
    pub terminal_id: String,
    pub username: String,
}

/// Startup-fatal configuration faults
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Note: minimum must match POLL_INTERVAL_MIN_SECS in constants.rs
    #[error("invalid poll interval '{0}': must be a whole number of seconds, at least 1")]
    InvalidInterval(String),
}
