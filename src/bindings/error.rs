//! bindings::error
//!
//! Binding error taxonomy and the native error reporting bridge.
//!
//! Every failure a host can observe is a [`BindingError`]. Validation errors
//! are produced before any native call; native failures enter through
//! [`check`], which keeps libgit2's message verbatim.

use thiserror::Error;
use tracing::debug;

use crate::core::paths::PathError;
use crate::core::types::TypeError;
use crate::git::GitError;

/// Errors surfaced to the host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindingError {
    /// A builtin was called with the wrong number of arguments.
    #[error("{builtin}: expecting {expected} argument(s), got {got}")]
    InvalidArgumentCount {
        builtin: &'static str,
        expected: &'static str,
        got: usize,
    },

    /// An argument had the wrong host type.
    #[error("expecting {expected}, got {found}")]
    InvalidArgumentType {
        expected: &'static str,
        found: &'static str,
    },

    /// A string identifier had the wrong length or non-hex content.
    #[error("{0}")]
    InvalidIdentifierFormat(String),

    /// A binary identifier had the wrong number of bytes.
    #[error("Git SHA-1 binary identifier must have {expected} bytes, got {actual}")]
    InvalidIdentifierLength { expected: usize, actual: usize },

    /// A repository path was empty or could not be normalized.
    #[error("{0}")]
    InvalidPath(String),

    /// The native library reported a failure; displays its message verbatim.
    #[error(transparent)]
    NativeLibraryFailure(#[from] GitError),

    /// Member access on a bound object named an unsupported field.
    #[error("invalid member '{field}' of {type_name}")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    /// A bound object was invoked as a function.
    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },

    /// The object's native handle has already been released.
    #[error("{type_name} has been released")]
    Released { type_name: &'static str },
}

impl BindingError {
    /// Whether this error came out of the native library.
    pub fn is_native(&self) -> bool {
        matches!(self, BindingError::NativeLibraryFailure(_))
    }
}

impl From<TypeError> for BindingError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidOidFormat(msg) => BindingError::InvalidIdentifierFormat(msg),
            TypeError::InvalidOidLength { expected, actual } => {
                BindingError::InvalidIdentifierLength { expected, actual }
            }
        }
    }
}

impl From<PathError> for BindingError {
    fn from(err: PathError) -> Self {
        BindingError::InvalidPath(err.to_string())
    }
}

/// Report the outcome of a native call.
///
/// A no-op on success. On failure the native error, captured right after the
/// failing call, becomes [`BindingError::NativeLibraryFailure`]. Callers that
/// want a non-fatal path inspect the result before handing it here.
pub fn check<T>(result: Result<T, GitError>) -> Result<T, BindingError> {
    result.map_err(|err| {
        debug!(code = err.code, class = %err.class, message = %err.message, "native failure");
        BindingError::NativeLibraryFailure(err)
    })
}
