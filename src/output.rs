//! Output formatting module
//!
//! Renders one stdout line per detected activity event:
//! `<poll-timestamp>; <terminal>; <user>`, optionally preceded by BEL.
//! Diagnostics go to stderr via tracing, so stdout carries report lines only.

use crate::constants::{BELL, REPORT_DELIMITER};
use crate::models::ActivityReport;

/// Render a report line, without its trailing newline
pub fn format_report(report: &ActivityReport) -> String {
    [
        report.window_label.as_str(),
        report.terminal_id.as_str(),
        report.username.as_str(),
    ]
    .join(REPORT_DELIMITER)
}

/// Print a report line to stdout, ringing the bell first when requested
pub fn emit_report(report: &ActivityReport, ring_bell: bool) {
    if ring_bell {
        print!("{BELL}");
    }
    println!("{}", format_report(report));
}
