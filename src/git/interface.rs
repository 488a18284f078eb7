//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to libgit2. All native calls
//! (library init, repository open, blob lookup, hex decoding) flow through
//! here, and every native failure is normalized into [`GitError`] with the
//! library's own message preserved verbatim.
//!
//! # Architecture
//!
//! The `Git` struct is the only way to hold an open repository. No other
//! module should import `git2` directly. This ensures:
//!
//! - Native error text is captured at the failing call, never later
//! - Blob content is copied out before the native object is freed
//! - Strong types (`Oid`) at the boundary
//!
//! # Example
//!
//! ```ignore
//! use gitbind::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("/tmp/demo.git"))?;
//! let blob = git.find_blob(&oid)?;
//! println!("{} bytes", blob.size());
//! ```

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

use crate::core::types::{Oid, TypeError};

/// libgit2's `GIT_ENOTFOUND` status.
const GIT_ENOTFOUND: i32 = -3;

/// Errors from native Git operations.
///
/// The `Display` form is the native library's message with no rewording, so
/// diagnostics stay actionable for the host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct GitError {
    /// Raw libgit2 status code (always negative).
    pub code: i32,
    /// libgit2 error class, e.g. `Repository` or `Odb`.
    pub class: String,
    /// Message recorded by libgit2 for the failing call.
    pub message: String,
}

impl GitError {
    /// Capture the native error state from a git2::Error.
    ///
    /// git2 reads libgit2's last-error slot while building the error, i.e.
    /// immediately after the failing call.
    fn from_git2(err: git2::Error) -> Self {
        Self {
            code: err.raw_code(),
            class: format!("{:?}", err.class()),
            message: err.message().to_string(),
        }
    }

    /// Check if this error means the requested object or repository is absent.
    pub fn is_not_found(&self) -> bool {
        self.code == GIT_ENOTFOUND
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        Self::from_git2(err)
    }
}

/// Native library version as reported by libgit2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeVersion {
    pub major: u32,
    pub minor: u32,
    pub rev: u32,
}

impl std::fmt::Display for NativeVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.rev)
    }
}

static INIT_LEVEL: AtomicUsize = AtomicUsize::new(0);

/// Initialize the native library for this process.
///
/// Idempotent: only the first call does any work, and native initialization
/// itself happens at most once per process. Returns the library version
/// when this call performed the initialization, `None` if it was already
/// initialized.
pub fn init() -> Option<NativeVersion> {
    if INIT_LEVEL
        .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return None;
    }
    // Runs git_libgit2_init once per process and registers the matching
    // git_libgit2_shutdown at exit. git2 shares the same guard.
    libgit2_sys::init();
    let (major, minor, rev) = git2::Version::get().libgit2_version();
    Some(NativeVersion { major, minor, rev })
}

/// Mark the native library as shut down.
///
/// libgit2's global state is torn down by git2 at process exit; this only
/// resets the init level so a later [`init`] runs again. Returns `true` if the
/// library was initialized.
pub fn shutdown() -> bool {
    INIT_LEVEL
        .compare_exchange(1, 0, Ordering::SeqCst, Ordering::SeqCst)
        .is_ok()
}

/// Whether [`init`] has run (and [`shutdown`] has not undone it).
pub fn is_initialized() -> bool {
    INIT_LEVEL.load(Ordering::SeqCst) > 0
}

/// Decode a hexadecimal identifier using the native parser.
///
/// Callers are expected to have checked the length; this only converts.
pub(crate) fn decode_hex_oid(hex: &str) -> Result<Oid, TypeError> {
    let oid = git2::Oid::from_str(hex)
        .map_err(|e| TypeError::InvalidOidFormat(e.message().to_string()))?;
    Oid::from_bytes(oid.as_bytes())
}

/// A blob's raw content, copied out of the object database.
///
/// The native `git2::Blob` borrows its repository; copying the content at
/// lookup time lets the native object be freed immediately, so a `RawBlob`
/// never depends on the repository staying open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlob {
    content: Vec<u8>,
}

impl RawBlob {
    /// Raw size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Raw content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// An open Git repository.
///
/// This is the **single point of interaction** with a native repository
/// handle. Dropping it frees the handle.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open the repository at exactly `path`.
    ///
    /// Unlike discovery, parent directories are not searched. Both bare
    /// repositories and working directories containing `.git` are accepted.
    ///
    /// # Errors
    ///
    /// Returns the native error (not a repository, permission denied, not
    /// found) unchanged.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::open(path)?;
        Ok(Self { repo })
    }

    /// Path to the repository's git directory.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Whether the repository has no working directory.
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    // =========================================================================
    // Blob Operations
    // =========================================================================

    /// Look up a blob by identifier and copy out its content.
    ///
    /// # Errors
    ///
    /// Returns the native error if the object is absent or is not a blob.
    pub fn find_blob(&self, oid: &Oid) -> Result<RawBlob, GitError> {
        let git_oid = git2::Oid::from_bytes(oid.as_bytes())?;
        let blob = self.repo.find_blob(git_oid)?;
        Ok(RawBlob {
            content: blob.content().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod git_error {
        use super::*;

        #[test]
        fn display_is_native_message_verbatim() {
            let err = GitError {
                code: -3,
                class: "Odb".to_string(),
                message: "object not found - no match for id (abc)".to_string(),
            };
            assert_eq!(err.to_string(), "object not found - no match for id (abc)");
            assert!(err.is_not_found());
        }

        #[test]
        fn captures_git2_error_fields() {
            let err = GitError::from(git2::Error::new(
                git2::ErrorCode::NotFound,
                git2::ErrorClass::Odb,
                "missing",
            ));
            assert_eq!(err.message, "missing");
            assert_eq!(err.class, "Odb");
            assert!(err.is_not_found());
        }
    }

    mod decode {
        use super::*;

        #[test]
        fn native_rejects_non_hex() {
            let err = decode_hex_oid("zz9de29bb2d1d6434b8b29ae775ad8c2e48c5391").unwrap_err();
            assert!(matches!(err, TypeError::InvalidOidFormat(_)));
        }

        #[test]
        fn native_decodes_valid_hex() {
            let oid = decode_hex_oid("e69de29bb2d1d6434b8b29ae775ad8c2e48c5391").unwrap();
            assert_eq!(oid.to_hex(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
        }
    }

    mod open {
        use super::*;

        #[test]
        fn missing_directory_fails_with_native_message() {
            let dir = tempfile::TempDir::new().unwrap();
            let err = Git::open(&dir.path().join("does-not-exist")).unwrap_err();
            assert!(err.code < 0);
            assert!(!err.message.is_empty());
        }

        #[test]
        fn opens_bare_repository() {
            let dir = tempfile::TempDir::new().unwrap();
            git2::Repository::init_bare(dir.path()).unwrap();
            let git = Git::open(dir.path()).unwrap();
            assert!(git.is_bare());
        }
    }
}
