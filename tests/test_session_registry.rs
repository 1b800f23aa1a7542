//! Functional tests for session registry enumeration against fabricated
//! utmp files, so no live login sessions are required.

use std::io::Write;

use ttywatch::models::SessionRecord;
use ttywatch::sessions::enumerate_sessions_from;

const UTMP_RECORD_SIZE: usize = 384;

const BOOT_TIME: i16 = 2;
const USER_PROCESS: i16 = 7;
const DEAD_PROCESS: i16 = 8;

/// Build one raw utmp record in the glibc on-disk layout: ut_type at 0,
/// ut_pid at 4, ut_line at 8 (32 bytes), ut_user at 44 (32 bytes),
/// ut_tv.tv_sec at 340.
fn utmp_record(ut_type: i16, pid: i32, line: &str, user: &str) -> [u8; UTMP_RECORD_SIZE] {
    assert!(line.len() < 32 && user.len() < 32);
    let mut buf = [0u8; UTMP_RECORD_SIZE];
    buf[0..2].copy_from_slice(&ut_type.to_ne_bytes());
    buf[4..8].copy_from_slice(&pid.to_ne_bytes());
    buf[8..8 + line.len()].copy_from_slice(line.as_bytes());
    buf[44..44 + user.len()].copy_from_slice(user.as_bytes());
    buf[340..344].copy_from_slice(&1_336_847_000_i32.to_ne_bytes());
    buf
}

fn registry_with(records: &[[u8; UTMP_RECORD_SIZE]]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for record in records {
        file.write_all(record).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_user_process_entries_become_session_records() {
    let file = registry_with(&[
        utmp_record(USER_PROCESS, 4242, "pts/7", "alice"),
        utmp_record(USER_PROCESS, 4243, "tty1", "bob"),
    ]);

    let records = enumerate_sessions_from(file.path()).unwrap();
    assert_eq!(
        records,
        vec![
            SessionRecord {
                username: "alice".to_string(),
                terminal_id: "pts/7".to_string(),
            },
            SessionRecord {
                username: "bob".to_string(),
                terminal_id: "tty1".to_string(),
            },
        ]
    );
}

#[test]
fn test_non_user_entries_are_filtered_out() {
    let file = registry_with(&[
        utmp_record(BOOT_TIME, 0, "~", "reboot"),
        utmp_record(USER_PROCESS, 4242, "pts/2", "alice"),
        utmp_record(DEAD_PROCESS, 4000, "pts/5", ""),
    ]);

    let records = enumerate_sessions_from(file.path()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].username, "alice");
    assert_eq!(records[0].terminal_id, "pts/2");
}

#[test]
fn test_registry_order_is_preserved() {
    let file = registry_with(&[
        utmp_record(USER_PROCESS, 1, "tty3", "carol"),
        utmp_record(USER_PROCESS, 2, "pts/0", "alice"),
        utmp_record(USER_PROCESS, 3, "pts/1", "bob"),
    ]);

    let records = enumerate_sessions_from(file.path()).unwrap();
    let terminals: Vec<&str> = records.iter().map(|r| r.terminal_id.as_str()).collect();
    assert_eq!(terminals, vec!["tty3", "pts/0", "pts/1"]);
}

#[test]
fn test_empty_registry_yields_nothing() {
    let file = registry_with(&[]);
    assert!(enumerate_sessions_from(file.path()).unwrap().is_empty());
}
