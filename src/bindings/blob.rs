//! bindings::blob
//!
//! Bound blob objects.
//!
//! A [`BlobHandle`] holds a blob's content and the identifier it was looked
//! up with. The content is copied out of the object database at lookup time,
//! so a blob holds no reference to the repository that resolved it and stays
//! valid after that repository is released.
//!
//! # Fields
//!
//! | name      | value                             |
//! |-----------|-----------------------------------|
//! | `content` | raw bytes (a copy)                |
//! | `size`    | byte length as an integer         |
//! | `hash`    | 40-character lower-case hex       |
//! | `oid`     | raw 20-byte identifier            |

use tracing::debug;

use crate::bindings::error::check;
use crate::bindings::{BindingError, ForeignObject, RepositoryHandle};
use crate::core::types::Oid;
use crate::git::RawBlob;
use crate::host::Value;

/// A looked-up blob.
#[derive(Debug)]
pub struct BlobHandle {
    blob: Option<RawBlob>,
    oid: Oid,
}

impl BlobHandle {
    pub const TYPE_NAME: &'static str = "git_blob";

    /// Resolve `oid` in `repository`.
    ///
    /// # Errors
    ///
    /// - [`BindingError::Released`] if the repository was already released
    /// - [`BindingError::NativeLibraryFailure`] if the object is missing or
    ///   is not a blob
    pub fn lookup(repository: &RepositoryHandle, oid: Oid) -> Result<Self, BindingError> {
        let git = repository.git()?;
        let blob = check(git.find_blob(&oid))?;
        debug!(%oid, size = blob.size(), "looked up blob");

        Ok(Self {
            blob: Some(blob),
            oid,
        })
    }

    /// The identifier the blob was looked up with.
    pub fn oid(&self) -> Oid {
        self.oid
    }

    /// Raw size in bytes.
    pub fn size(&self) -> Result<usize, BindingError> {
        self.raw().map(RawBlob::size)
    }

    /// Raw content.
    pub fn content(&self) -> Result<&[u8], BindingError> {
        self.raw().map(RawBlob::content)
    }

    fn raw(&self) -> Result<&RawBlob, BindingError> {
        self.blob.as_ref().ok_or(BindingError::Released {
            type_name: Self::TYPE_NAME,
        })
    }
}

impl ForeignObject for BlobHandle {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn release(&mut self) {
        if self.blob.take().is_some() {
            debug!(oid = %self.oid, "released blob");
        }
    }

    fn is_released(&self) -> bool {
        self.blob.is_none()
    }

    fn describe(&self) -> String {
        match &self.blob {
            Some(blob) => format!(
                "Git blob (size = {} byte(s), hash = {})",
                blob.size(),
                self.oid
            ),
            None => format!("Git blob (released, hash = {})", self.oid),
        }
    }

    fn get_field(&self, name: &str) -> Result<Value, BindingError> {
        match name {
            "content" => Ok(Value::Bytes(self.content()?.to_vec())),
            "size" => {
                // A Vec never holds more than isize::MAX bytes, which always
                // fits in i64, so the fallback is unreachable.
                let size = self.size()?;
                Ok(Value::Int(i64::try_from(size).unwrap_or(i64::MAX)))
            }
            "hash" => Ok(Value::Str(self.oid.to_hex())),
            "oid" => Ok(Value::Bytes(self.oid.as_bytes().to_vec())),
            _ => Err(BindingError::UnknownField {
                type_name: Self::TYPE_NAME,
                field: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        repo: RepositoryHandle,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            git2::Repository::init_bare(dir.path()).unwrap();
            let repo = RepositoryHandle::open(&dir.path().to_string_lossy(), false).unwrap();
            Self { _dir: dir, repo }
        }

        fn write(&self, content: &[u8]) -> Oid {
            let raw = git2::Repository::open(self.repo.dir())
                .unwrap()
                .blob(content)
                .unwrap();
            Oid::from_bytes(raw.as_bytes()).unwrap()
        }
    }

    #[test]
    fn fields_reflect_content() {
        let fx = Fixture::new();
        let oid = fx.write(b"hello\n");
        let blob = BlobHandle::lookup(&fx.repo, oid).unwrap();

        assert_eq!(blob.get_field("size").unwrap(), Value::Int(6));
        assert_eq!(
            blob.get_field("content").unwrap(),
            Value::Bytes(b"hello\n".to_vec())
        );
        assert_eq!(blob.get_field("hash").unwrap(), Value::Str(oid.to_hex()));
        assert_eq!(
            blob.get_field("oid").unwrap(),
            Value::Bytes(oid.as_bytes().to_vec())
        );
    }

    #[test]
    fn size_matches_content_length() {
        let fx = Fixture::new();
        let contents: [&[u8]; 3] = [b"", b"\0", &[0xff; 70_000]];
        for content in contents {
            let blob = BlobHandle::lookup(&fx.repo, fx.write(content)).unwrap();
            let Value::Bytes(bytes) = blob.get_field("content").unwrap() else {
                panic!("content is not a byte vector");
            };
            assert_eq!(bytes.len(), content.len());
            assert_eq!(
                blob.get_field("size").unwrap(),
                Value::Int(content.len() as i64)
            );
        }
    }

    #[test]
    fn describe_shows_size_and_hash() {
        let fx = Fixture::new();
        let oid = fx.write(b"");
        let blob = BlobHandle::lookup(&fx.repo, oid).unwrap();
        insta::assert_snapshot!(
            blob.describe(),
            @"Git blob (size = 0 byte(s), hash = e69de29bb2d1d6434b8b29ae775ad8c2e48c5391)"
        );
    }

    #[test]
    fn missing_object_is_native_failure() {
        let fx = Fixture::new();
        let err = BlobHandle::lookup(&fx.repo, Oid::from_raw([0x11; 20])).unwrap_err();
        assert!(err.is_native());
    }

    #[test]
    fn lookup_through_released_repository_fails() {
        let mut fx = Fixture::new();
        let oid = fx.write(b"x");
        fx.repo.release();
        assert_eq!(
            BlobHandle::lookup(&fx.repo, oid).unwrap_err(),
            BindingError::Released {
                type_name: "git_repository"
            }
        );
    }

    #[test]
    fn release_keeps_identifier_fields() {
        let fx = Fixture::new();
        let oid = fx.write(b"abc");
        let mut blob = BlobHandle::lookup(&fx.repo, oid).unwrap();
        blob.release();
        blob.release();

        assert!(blob.is_released());
        assert_eq!(blob.get_field("hash").unwrap(), Value::Str(oid.to_hex()));
        assert!(matches!(
            blob.get_field("content"),
            Err(BindingError::Released { .. })
        ));
        assert_eq!(blob.describe(), format!("Git blob (released, hash = {oid})"));
    }

    #[test]
    fn unknown_field_and_not_callable() {
        let fx = Fixture::new();
        let blob = BlobHandle::lookup(&fx.repo, fx.write(b"abc")).unwrap();
        assert!(matches!(
            blob.get_field("data"),
            Err(BindingError::UnknownField { .. })
        ));
        assert_eq!(
            blob.invoke(&[Value::Int(1)]).unwrap_err(),
            BindingError::NotCallable {
                type_name: "git_blob"
            }
        );
    }
}
