//! Tests for process-wide native library initialization.
//!
//! Kept in their own test binary: init state is global to the process.

use gitbind::builtins::{init, shutdown};
use gitbind::git;
use gitbind::host::{Host, HostOptions};

#[test]
fn init_and_shutdown_are_idempotent() {
    assert!(!git::is_initialized());

    assert!(init());
    assert!(git::is_initialized());

    // Native init already ran once, so this call only bumps libgit2's
    // counter to 2. Undo it right away.
    let count = unsafe { libgit2_sys::git_libgit2_init() };
    assert_eq!(count, 2, "init did not initialize libgit2");
    unsafe { libgit2_sys::git_libgit2_shutdown() };

    assert!(!init());
    assert!(!init());

    assert!(shutdown());
    assert!(!git::is_initialized());
    assert!(!shutdown());

    // Through the host, with and without arguments.
    let host = Host::new(HostOptions::default());
    assert_eq!(host.call("git_init", &[]).unwrap(), None);
    assert!(git::is_initialized());
    assert_eq!(
        host.call("git_init", &[gitbind::host::Value::Int(1)]).unwrap(),
        None
    );
    assert_eq!(host.call("git_shutdown", &[]).unwrap(), None);
    assert!(!git::is_initialized());
}
