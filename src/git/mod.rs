//! git
//!
//! Single interface for all native Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to libgit2. Repository handles, blob
//! reads, native hex decoding and library initialization all flow through
//! this interface. No other module should import `git2`.
//!
//! # Responsibilities
//!
//! - Process-wide library init/shutdown
//! - Repository opening
//! - Blob lookup (content copied out of the object database)
//! - Hex identifier decoding with the native parser
//!
//! # Invariants
//!
//! - Native error messages are captured at the failing call and kept verbatim
//! - No value returned from this module borrows a native object
//!
//! # Example
//!
//! ```ignore
//! use gitbind::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("/tmp/demo.git"))?;
//! let blob = git.find_blob(&oid)?;
//! ```

mod interface;

pub(crate) use interface::decode_hex_oid;
pub use interface::{init, is_initialized, shutdown, Git, GitError, NativeVersion, RawBlob};
