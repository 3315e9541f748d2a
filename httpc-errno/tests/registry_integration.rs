//! Integration tests for the process-wide registry

use httpc_errno::{describe, message_of, name_of, registry, Platform};

#[test]
fn test_sentinel() {
    assert_eq!(name_of(0), "");
    assert_eq!(message_of(0), "");
    assert_eq!(describe(0), "");
}

#[test]
fn test_unknown_codes() {
    assert_eq!(name_of(999999), "999999");
    assert_eq!(message_of(999999), "Unknown error (code 999999)");
    assert_eq!(describe(999999), "Unknown error (code 999999)");

    assert_eq!(name_of(i32::MIN), i32::MIN.to_string());
    assert_eq!(
        message_of(i32::MIN),
        format!("Unknown error (code {})", i32::MIN)
    );
}

#[test]
fn test_registered_entries_round_trip() {
    for entry in registry().entries() {
        assert_eq!(name_of(entry.code()), entry.name());
        assert_eq!(message_of(entry.code()), entry.message());
        assert_eq!(describe(entry.code()), entry.message());
    }
}

#[test]
#[cfg(any(target_os = "macos", target_os = "freebsd", target_os = "linux"))]
fn test_posix_scenarios() {
    if Platform::current() == Platform::Other {
        return;
    }

    assert_eq!(name_of(2), "ENOENT");
    assert_eq!(message_of(2), "No such file or directory");
    assert_eq!(message_of(13), "Permission denied");
    assert_eq!(name_of(32), "EPIPE");
}

#[test]
#[cfg(any(target_os = "linux", target_os = "android"))]
fn test_linux_matches_os_errors() {
    use std::io;

    if Platform::current() != Platform::Linux {
        return;
    }

    let err = io::Error::from_raw_os_error(111);
    assert_eq!(err.kind(), io::ErrorKind::ConnectionRefused);
    assert_eq!(name_of(111), "ECONNREFUSED");
    assert_eq!(message_of(111), "Connection refused");

    assert_eq!(name_of(11), "EWOULDBLOCK");
    assert_eq!(registry().platform(), Platform::Linux);
}

#[test]
fn test_idempotent() {
    for code in [-7, 0, 2, 11, 35, 4096] {
        let first = (name_of(code), message_of(code));
        for _ in 0..10 {
            assert_eq!((name_of(code), message_of(code)), first);
        }
    }
}
