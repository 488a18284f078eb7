//! Architecture enforcement tests.
//!
//! `src/git/` is the single doorway to libgit2, and command handlers reach
//! the bindings only through the host builtins. These tests keep both rules
//! from eroding.
//!
//! # Test Categories
//!
//! 1. **Native Import Detection** - Only `src/git/` may name `git2` or
//!    `libgit2_sys`
//! 2. **Command Layering** - Handlers must not import bindings or `git`
//! 3. **Builtin Coverage** - Every registered name has a handler

use std::fs;
use std::path::{Path, PathBuf};

/// Directories that may use `git2` outside of tests.
const NATIVE_DOORWAY: &[&str] = &["src/git"];

/// Collect every `.rs` file under `dir`.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            files.push(path);
        }
    }
    files
}

/// Source lines before the test module, with comment lines removed.
fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()));
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect()
}

// =============================================================================
// Native Import Detection
// =============================================================================

#[test]
fn only_git_module_uses_git2() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src")) {
        let display = path.to_string_lossy().replace('\\', "/");
        if NATIVE_DOORWAY.iter().any(|dir| display.starts_with(dir)) {
            continue;
        }
        for (line_no, line) in production_lines(&path) {
            if line.contains("git2::") || line.contains("use git2") || line.contains("libgit2_sys")
            {
                violations.push(format!("{display}:{line_no}: {}", line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "native bindings used outside src/git/:\n{}",
        violations.join("\n")
    );
}

// =============================================================================
// Command Layering
// =============================================================================

#[test]
fn commands_go_through_host() {
    let forbidden = ["crate::bindings", "crate::git", "crate::builtins"];
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/cli/commands")) {
        let display = path.to_string_lossy().replace('\\', "/");
        for (line_no, line) in production_lines(&path) {
            if forbidden.iter().any(|f| line.contains(f)) {
                violations.push(format!("{display}:{line_no}: {}", line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "command handlers must call builtins through the host:\n{}",
        violations.join("\n")
    );
}

// =============================================================================
// Builtin Coverage
// =============================================================================

#[test]
fn every_builtin_is_registered() {
    let content = fs::read_to_string("src/builtins.rs").expect("Failed to read builtins.rs");
    for name in [
        "git_init",
        "git_shutdown",
        "git_repository_open",
        "git_blob_lookup",
        "git_oid_tostr",
        "git_oid_fromstr",
    ] {
        assert!(
            content.contains(&format!("host.register(\"{name}\", {name});")),
            "{name} is not registered"
        );
        assert!(
            content.contains(&format!("fn {name}(ctx")) || content.contains(&format!("fn {name}(_ctx")),
            "{name} has no handler"
        );
    }
}
