//! Session registry enumeration
//!
//! Reads the utmp login-session registry and yields one record per
//! interactive user session. Every call performs a fresh scan of the whole
//! registry; nothing is cached between polls. The table is small, and a full
//! rescan is self-healing against updates missed by an incremental approach.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use utmp_rs::{UtmpEntry, UtmpParser};

use crate::constants::UTMP_PATH;
use crate::models::SessionRecord;

/// Scan the system session registry
pub fn enumerate_active_sessions() -> Result<Vec<SessionRecord>> {
    enumerate_sessions_from(Path::new(UTMP_PATH))
}

/// Scan an explicit registry file.
///
/// A registry that cannot be opened at all is an environment failure and
/// propagates to the caller. A single entry that fails to parse is skipped;
/// the rest of the registry is still scanned. Entries the registry itself
/// classifies as boot, init, login, or dead records are not terminals and
/// never yield a record.
pub fn enumerate_sessions_from(path: &Path) -> Result<Vec<SessionRecord>> {
    let parser = UtmpParser::from_path(path)
        .with_context(|| format!("cannot open session registry {}", path.display()))?;

    let mut records = Vec::new();
    for entry in parser {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping malformed entry in {}: {}", path.display(), err);
                continue;
            }
        };
        if let UtmpEntry::UserProcess { user, line, .. } = entry {
            records.push(SessionRecord {
                username: user,
                terminal_id: line,
            });
        }
    }
    Ok(records)
}
