//! Path canonicalization and relative-path helpers

use crate::error::GraftError;
use std::path::{Path, PathBuf};

/// Canonicalize a path for traversal and logging.
///
/// Uses `dunce` so Windows paths come back without the verbatim `\\?\`
/// prefix. Fails when the path does not exist.
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, GraftError> {
    dunce::canonicalize(path).map_err(|e| {
        GraftError::InvalidPath(format!("Failed to canonicalize {:?}: {}", path, e))
    })
}

/// Relative path of `path` beneath `base`.
pub fn relative_to<'a>(path: &'a Path, base: &Path) -> Result<&'a Path, GraftError> {
    path.strip_prefix(base)
        .map_err(|_| GraftError::InvalidPath(format!("{:?} is not beneath {:?}", path, base)))
}
