//! bindings
//!
//! Bound object types exposed to the host.
//!
//! # Architecture
//!
//! The host stores every bound object as a [`BoundObject`], a tagged union
//! over the concrete handle types. All access goes through the
//! [`ForeignObject`] protocol; the host never inspects a handle directly.
//!
//! - [`RepositoryHandle`] - an open repository plus its directory
//! - [`BlobHandle`] - a blob's content plus its identifier
//! - [`BindingError`] - every failure the host can observe
//!
//! # Invariants
//!
//! - A handle is released exactly once in effect: `release` may be called
//!   again (explicitly or on drop) without freeing anything twice
//! - A blob never references the repository it was resolved in

mod blob;
pub mod error;
mod protocol;
mod repository;

pub use blob::BlobHandle;
pub use error::BindingError;
pub use protocol::ForeignObject;
pub use repository::RepositoryHandle;

use crate::host::Value;

/// A bound object as stored in the host's object table.
#[derive(Debug)]
pub enum BoundObject {
    Repository(RepositoryHandle),
    Blob(BlobHandle),
}

impl BoundObject {
    fn as_foreign(&self) -> &dyn ForeignObject {
        match self {
            BoundObject::Repository(repo) => repo,
            BoundObject::Blob(blob) => blob,
        }
    }

    fn as_foreign_mut(&mut self) -> &mut dyn ForeignObject {
        match self {
            BoundObject::Repository(repo) => repo,
            BoundObject::Blob(blob) => blob,
        }
    }

    /// The repository handle, if this is one.
    pub fn as_repository(&self) -> Option<&RepositoryHandle> {
        match self {
            BoundObject::Repository(repo) => Some(repo),
            BoundObject::Blob(_) => None,
        }
    }

    /// The blob handle, if this is one.
    pub fn as_blob(&self) -> Option<&BlobHandle> {
        match self {
            BoundObject::Blob(blob) => Some(blob),
            BoundObject::Repository(_) => None,
        }
    }
}

impl ForeignObject for BoundObject {
    fn type_name(&self) -> &'static str {
        self.as_foreign().type_name()
    }

    fn release(&mut self) {
        self.as_foreign_mut().release();
    }

    fn is_released(&self) -> bool {
        self.as_foreign().is_released()
    }

    fn describe(&self) -> String {
        self.as_foreign().describe()
    }

    fn invoke(&self, args: &[Value]) -> Result<Option<Value>, BindingError> {
        self.as_foreign().invoke(args)
    }

    fn get_field(&self, name: &str) -> Result<Value, BindingError> {
        self.as_foreign().get_field(name)
    }
}

impl Drop for BoundObject {
    fn drop(&mut self) {
        self.release();
    }
}

impl From<RepositoryHandle> for BoundObject {
    fn from(repo: RepositoryHandle) -> Self {
        BoundObject::Repository(repo)
    }
}

impl From<BlobHandle> for BoundObject {
    fn from(blob: BlobHandle) -> Self {
        BoundObject::Blob(blob)
    }
}
