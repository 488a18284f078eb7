//! builtins
//!
//! Entry points callable from host code.
//!
//! # Layers
//!
//! Each entry point exists twice:
//!
//! - a `Result`-returning core function ([`open_repository`],
//!   [`lookup_blob`], [`try_lookup_blob`], [`identifier_to_string`],
//!   [`identifier_from_string`], [`init`], [`shutdown`])
//! - a host adapter registered by [`register`], which validates the argument
//!   count, calls the core function, and pushes the result
//!
//! # Registered names
//!
//! | name                  | arguments                          | result               |
//! |-----------------------|------------------------------------|----------------------|
//! | `git_init`            | none                               | none                 |
//! | `git_shutdown`        | none                               | none                 |
//! | `git_repository_open` | path                               | repository object    |
//! | `git_blob_lookup`     | repository, identifier, [default]  | blob object or none  |
//! | `git_oid_tostr`       | 20 bytes                           | 40-char hex string   |
//! | `git_oid_fromstr`     | 40-char hex string                 | 20 bytes             |
//!
//! Passing a third argument to `git_blob_lookup` selects the tolerant
//! calling convention: any identifier or lookup failure produces no value
//! instead of an error.

use tracing::{debug, info};

use crate::bindings::{BindingError, BlobHandle, RepositoryHandle};
use crate::core::types::Oid;
use crate::git;
use crate::host::{CallContext, Host, HostOptions, ObjectRef, Value};

/// Register every git builtin on `host`.
pub fn register(host: &mut Host) {
    host.register("git_init", git_init);
    host.register("git_shutdown", git_shutdown);
    host.register("git_repository_open", git_repository_open);
    host.register("git_blob_lookup", git_blob_lookup);
    host.register("git_oid_tostr", git_oid_tostr);
    host.register("git_oid_fromstr", git_oid_fromstr);
}

// =============================================================================
// Core API
// =============================================================================

/// Initialize the native library once per process.
///
/// Returns `true` if this call did the initialization.
pub fn init() -> bool {
    match git::init() {
        Some(version) => {
            info!(%version, "initialized libgit2");
            true
        }
        None => false,
    }
}

/// Undo [`init`]. Returns `true` if the library was initialized.
pub fn shutdown() -> bool {
    let was_initialized = git::shutdown();
    if was_initialized {
        info!("shut down libgit2");
    }
    was_initialized
}

/// Open the repository at `path` as a bound object.
///
/// # Errors
///
/// - [`BindingError::InvalidPath`] for an empty path
/// - [`BindingError::NativeLibraryFailure`] if the repository cannot be opened
pub fn open_repository(path: &str, options: &HostOptions) -> Result<ObjectRef, BindingError> {
    let repo = RepositoryHandle::open(path, options.expand_tilde)?;
    Ok(ObjectRef::new(repo))
}

/// Look up a blob in `repository`.
///
/// `identifier` is either a 40-character hex string or a 20-byte vector.
///
/// # Errors
///
/// - [`BindingError::InvalidArgumentType`] if `repository` is not a repository
/// - [`BindingError::InvalidIdentifierFormat`] /
///   [`BindingError::InvalidIdentifierLength`] for a malformed identifier
/// - [`BindingError::NativeLibraryFailure`] if the blob cannot be found
pub fn lookup_blob(repository: &ObjectRef, identifier: &Value) -> Result<ObjectRef, BindingError> {
    repository.with_repository(|repo| {
        let oid = parse_identifier(identifier)?;
        let blob = BlobHandle::lookup(repo, oid)?;
        Ok(ObjectRef::new(blob))
    })
}

/// Tolerant form of [`lookup_blob`]: identifier and lookup failures yield
/// `Ok(None)`.
///
/// # Errors
///
/// Only a `repository` that is not a repository object is still an error.
pub fn try_lookup_blob(
    repository: &ObjectRef,
    identifier: &Value,
) -> Result<Option<ObjectRef>, BindingError> {
    repository.with_repository(|repo| {
        let found = parse_identifier(identifier).and_then(|oid| BlobHandle::lookup(repo, oid));
        match found {
            Ok(blob) => Ok(Some(ObjectRef::new(blob))),
            Err(err) => {
                debug!(error = %err, "blob lookup failed, producing no value");
                Ok(None)
            }
        }
    })
}

/// Encode a 20-byte identifier as 40 hex characters.
///
/// # Errors
///
/// - [`BindingError::InvalidArgumentType`] unless `bytes` is a byte vector
/// - [`BindingError::InvalidIdentifierLength`] unless it has 20 bytes
pub fn identifier_to_string(bytes: &Value) -> Result<String, BindingError> {
    let raw = bytes.as_bytes().ok_or(BindingError::InvalidArgumentType {
        expected: "byte vector",
        found: bytes.type_name(),
    })?;
    Ok(Oid::from_bytes(raw)?.to_hex())
}

/// Decode a 40-character hex identifier into 20 bytes.
///
/// # Errors
///
/// - [`BindingError::InvalidArgumentType`] unless `text` is a string
/// - [`BindingError::InvalidIdentifierFormat`] for a wrong length or non-hex
///   content
pub fn identifier_from_string(text: &Value) -> Result<Vec<u8>, BindingError> {
    let hex = text.as_str().ok_or(BindingError::InvalidArgumentType {
        expected: "string",
        found: text.type_name(),
    })?;
    Ok(Oid::from_hex(hex)?.as_bytes().to_vec())
}

/// Accept either identifier encoding.
fn parse_identifier(identifier: &Value) -> Result<Oid, BindingError> {
    match identifier {
        Value::Str(hex) => Ok(Oid::from_hex(hex)?),
        Value::Bytes(raw) => Ok(Oid::from_bytes(raw)?),
        _ => Err(BindingError::InvalidIdentifierFormat(
            "Git blob identifier must be a SHA-1 hash string or OID data".to_string(),
        )),
    }
}

// =============================================================================
// Host adapters
// =============================================================================

// Arguments are ignored, so the host may call these with any argument list.
fn git_init(_ctx: &mut CallContext<'_>) -> Result<(), BindingError> {
    init();
    Ok(())
}

fn git_shutdown(_ctx: &mut CallContext<'_>) -> Result<(), BindingError> {
    shutdown();
    Ok(())
}

fn git_repository_open(ctx: &mut CallContext<'_>) -> Result<(), BindingError> {
    ctx.expect_args(1, 1, "exactly 1")?;
    let path = match ctx.arg(0) {
        Value::Str(path) => path.as_str(),
        Value::Void => "",
        other => {
            return Err(BindingError::InvalidArgumentType {
                expected: "string",
                found: other.type_name(),
            })
        }
    };
    debug!(path, "git_repository_open");
    let repo = open_repository(path, ctx.options())?;
    ctx.push(repo);
    Ok(())
}

fn git_blob_lookup(ctx: &mut CallContext<'_>) -> Result<(), BindingError> {
    ctx.expect_args(2, 3, "2 or 3")?;
    let repository = ctx
        .arg(0)
        .as_object()
        .ok_or(BindingError::InvalidArgumentType {
            expected: RepositoryHandle::TYPE_NAME,
            found: ctx.arg(0).type_name(),
        })?;
    let identifier = ctx.arg(1);
    let tolerant = ctx.argc() == 3;
    debug!(tolerant, "git_blob_lookup");

    if tolerant {
        if let Some(blob) = try_lookup_blob(repository, identifier)? {
            ctx.push(blob);
        }
    } else {
        let blob = lookup_blob(repository, identifier)?;
        ctx.push(blob);
    }
    Ok(())
}

fn git_oid_tostr(ctx: &mut CallContext<'_>) -> Result<(), BindingError> {
    ctx.expect_args(1, 1, "exactly 1")?;
    let hex = identifier_to_string(ctx.arg(0))?;
    ctx.push(hex);
    Ok(())
}

fn git_oid_fromstr(ctx: &mut CallContext<'_>) -> Result<(), BindingError> {
    ctx.expect_args(1, 1, "exactly 1")?;
    let raw = identifier_from_string(ctx.arg(0))?;
    ctx.push(raw);
    Ok(())
}
