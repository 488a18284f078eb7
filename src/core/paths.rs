//! core::paths
//!
//! Path normalization for repository locations.
//!
//! # Contract
//!
//! [`expand_path`] is a pure function of its input, the home directory, and
//! the current working directory:
//!
//! 1. An empty path is rejected.
//! 2. With tilde expansion on, a leading `~` or `~/` is replaced by the home
//!    directory. `~user` forms are left untouched.
//! 3. A relative result is joined onto the current working directory.
//! 4. `.` components and repeated or trailing separators are dropped. `..`
//!    is kept, since resolving it lexically is wrong across symlinks.
//!
//! The filesystem is never touched beyond reading the working directory, so a
//! path that does not exist normalizes fine and fails later, at open time.
//!
//! # Example
//!
//! ```
//! use gitbind::core::paths::expand_path;
//! use std::path::PathBuf;
//!
//! let path = expand_path("/tmp/./demo.git/", true).unwrap();
//! assert_eq!(path, PathBuf::from("/tmp/demo.git"));
//! ```

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors from path normalization.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("invalid Git repository name")]
    Empty,

    #[error("failed to get current working directory: {0}")]
    NoCurrentDir(#[source] std::io::Error),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Normalize `path` into an absolute path.
///
/// See the module documentation for the exact rules.
///
/// # Errors
///
/// - [`PathError::Empty`] for an empty path
/// - [`PathError::NoHomeDir`] if `~` must be expanded and there is no home
/// - [`PathError::NoCurrentDir`] if the path is relative and the working
///   directory cannot be read
pub fn expand_path(path: &str, expand_tilde: bool) -> Result<PathBuf, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let expanded = if expand_tilde {
        expand_home(path)?
    } else {
        PathBuf::from(path)
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = std::env::current_dir().map_err(PathError::NoCurrentDir)?;
        cwd.join(expanded)
    };

    Ok(clean(&absolute))
}

/// Replace a leading `~` with the home directory.
fn expand_home(path: &str) -> Result<PathBuf, PathError> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return Ok(PathBuf::from(path)),
    };
    let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
    Ok(home.join(rest.trim_start_matches('/')))
}

/// Drop `.` components and redundant separators.
fn clean(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_rejected() {
        assert!(matches!(expand_path("", true), Err(PathError::Empty)));
        assert!(matches!(expand_path("", false), Err(PathError::Empty)));
    }

    #[test]
    fn empty_path_message() {
        let err = expand_path("", false).unwrap_err();
        assert_eq!(err.to_string(), "invalid Git repository name");
    }

    #[test]
    fn absolute_path_is_kept() {
        assert_eq!(
            expand_path("/tmp/demo.git", false).unwrap(),
            PathBuf::from("/tmp/demo.git")
        );
    }

    #[test]
    fn dot_components_and_slashes_dropped() {
        assert_eq!(
            expand_path("/tmp//./demo.git/.", false).unwrap(),
            PathBuf::from("/tmp/demo.git")
        );
    }

    #[test]
    fn parent_components_kept() {
        assert_eq!(
            expand_path("/tmp/a/../demo.git", false).unwrap(),
            PathBuf::from("/tmp/a/../demo.git")
        );
    }

    #[test]
    fn relative_path_joined_to_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            expand_path("some/repo", false).unwrap(),
            cwd.join("some/repo")
        );
    }

    #[test]
    fn tilde_expanded_when_enabled() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_path("~", true).unwrap(), clean(&home));
        assert_eq!(
            expand_path("~/repos/demo.git", true).unwrap(),
            clean(&home.join("repos/demo.git"))
        );
    }

    #[test]
    fn tilde_is_relative_when_disabled() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            expand_path("~/demo.git", false).unwrap(),
            cwd.join("~/demo.git")
        );
    }

    #[test]
    fn tilde_user_form_not_expanded() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            expand_path("~alice/demo.git", true).unwrap(),
            cwd.join("~alice/demo.git")
        );
    }
}
