//! CLI argument parsing and validation module
//!
//! Handles command-line interface using clap, including:
//! - Watch-mode flags (input/output activity, bell)
//! - Poll interval validation
//! - Optional username restrictions
//! - Help and version commands

use std::ffi::OsString;
use std::time::Duration;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::constants::{DEFAULT_POLL_INTERVAL_SECS, POLL_INTERVAL_MIN_SECS};
use crate::models::{ConfigError, WatchConfig};

/// Parse command line arguments and return configuration.
/// Help, version, and clap-level argument errors exit the process directly.
pub fn parse_args() -> Result<WatchConfig> {
    let matches = build_command().get_matches();
    config_from_matches(&matches)
}

/// Parse an explicit argument list. Split out from `parse_args` so tests can
/// drive parsing without touching the process environment.
pub fn parse_args_from<I, T>(args: I) -> Result<WatchConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;
    config_from_matches(&matches)
}

fn build_command() -> Command {
    Command::new("ttywatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report which login sessions show terminal activity")
        .long_about(
            "Watches the login-session registry and the terminal devices behind it, \
             reporting which sessions received keyboard input or produced output \
             during each poll interval.",
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Report when a terminal receives input data")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Report when a terminal sends output data")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bell")
                .short('b')
                .long("bell")
                .help("Ring the bell when a terminal is active")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interval")
                .short('t')
                .long("interval")
                .value_name("SECONDS")
                .help("Poll interval in seconds. Default and minimum 1")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("user")
                .value_name("USER")
                .help("Limit reporting to one or more users")
                .action(ArgAction::Append),
        )
}

fn config_from_matches(matches: &ArgMatches) -> Result<WatchConfig> {
    let poll_interval = match matches.get_one::<String>("interval") {
        Some(raw) => Duration::from_secs(parse_interval(raw)?),
        None => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
    };

    let username_filter = matches
        .get_many::<String>("user")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    Ok(WatchConfig {
        poll_interval,
        watch_input: matches.get_flag("input"),
        watch_output: matches.get_flag("output"),
        ring_bell: matches.get_flag("bell"),
        username_filter,
    })
}

/// Validate the interval value: a whole number of seconds, at least the
/// one-second timestamp resolution floor.
fn parse_interval(raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidInterval(raw.to_string()))?;
    if secs < POLL_INTERVAL_MIN_SECS {
        return Err(ConfigError::InvalidInterval(raw.to_string()).into());
    }
    Ok(secs)
}
