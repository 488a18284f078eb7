//! bindings::repository
//!
//! Bound repository objects.
//!
//! A [`RepositoryHandle`] owns an open native repository and the normalized
//! directory it was opened from. Construction either yields a fully open
//! handle or an error; a half-open handle never reaches the host.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bindings::error::check;
use crate::bindings::{BindingError, ForeignObject};
use crate::core::paths::expand_path;
use crate::git::Git;
use crate::host::Value;

/// An open repository plus the directory used to open it.
#[derive(Debug)]
pub struct RepositoryHandle {
    git: Option<Git>,
    dir: PathBuf,
}

impl RepositoryHandle {
    pub const TYPE_NAME: &'static str = "git_repository";

    /// Normalize `path` and open the repository there.
    ///
    /// # Errors
    ///
    /// - [`BindingError::InvalidPath`] for an empty path
    /// - [`BindingError::NativeLibraryFailure`] if libgit2 cannot open it
    pub fn open(path: &str, expand_tilde: bool) -> Result<Self, BindingError> {
        let dir = expand_path(path, expand_tilde)?;
        let git = check(Git::open(&dir))?;
        debug!(dir = %dir.display(), bare = git.is_bare(), "opened repository");

        Ok(Self {
            git: Some(git),
            dir,
        })
    }

    /// Directory the repository was opened from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The open native repository.
    pub(crate) fn git(&self) -> Result<&Git, BindingError> {
        self.git.as_ref().ok_or(BindingError::Released {
            type_name: Self::TYPE_NAME,
        })
    }

    fn dir_string(&self) -> String {
        self.dir.to_string_lossy().into_owned()
    }
}

impl ForeignObject for RepositoryHandle {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn release(&mut self) {
        if let Some(git) = self.git.take() {
            debug!(dir = %self.dir.display(), "released repository");
            drop(git);
        }
    }

    fn is_released(&self) -> bool {
        self.git.is_none()
    }

    fn describe(&self) -> String {
        format!("Git repository (dir = \"{}\")", self.dir_string())
    }

    fn get_field(&self, name: &str) -> Result<Value, BindingError> {
        match name {
            "dir" => Ok(Value::Str(self.dir_string())),
            _ => Err(BindingError::UnknownField {
                type_name: Self::TYPE_NAME,
                field: name.to_string(),
            }),
        }
    }
}
