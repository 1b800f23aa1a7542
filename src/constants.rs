//! Global constants for ttywatch
//!
//! Centralized location for application-wide constants

/// Login-session registry maintained by the operating system
pub const UTMP_PATH: &str = "/var/run/utmp";

/// Directory holding terminal character devices; registry line names
/// (e.g. "pts/3") are relative to it
pub const DEV_ROOT: &str = "/dev";

/// Field delimiter for report lines
pub const REPORT_DELIMITER: &str = "; ";

/// BEL, emitted before a report line when the bell option is set
pub const BELL: char = '\x07';

/// Default poll interval in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;

/// Minimum poll interval in seconds. Terminal device timestamps have
/// one-second resolution, so sub-second intervals cannot work.
pub const POLL_INTERVAL_MIN_SECS: u64 = 1;

/// ctime-style format for the poll window label printed on report lines
pub const WINDOW_LABEL_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Granularity at which the interval sleep rechecks the shutdown flag
pub const SHUTDOWN_POLL_MILLIS: u64 = 100;
