//! Filesystem walker for traversing directory structures

use crate::error::GraftError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Filesystem entry types
#[derive(Debug, Clone)]
pub enum Entry {
    /// A file entry with its path and size
    File { path: PathBuf, size: u64 },
    /// A directory entry with its path
    Directory { path: PathBuf },
}

impl Entry {
    /// Path of the entry regardless of kind.
    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path, .. } | Entry::Directory { path } => path,
        }
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect all entries beneath the root.
    ///
    /// The root itself is excluded; entries are sorted by path so traversal
    /// order is stable across runs. Symbolic links are skipped unless
    /// `follow_symlinks` is set.
    pub fn walk(&self) -> Result<Vec<Entry>, GraftError> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        for entry in walker {
            let entry = entry.map_err(|e| GraftError::Walk(e.to_string()))?;

            if entry.path() == self.root {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| {
                GraftError::Walk(format!(
                    "Failed to read metadata for {:?}: {}",
                    entry.path(),
                    e
                ))
            })?;

            if metadata.is_file() {
                entries.push(Entry::File {
                    path: entry.into_path(),
                    size: metadata.len(),
                });
            } else if metadata.is_dir() {
                entries.push(Entry::Directory {
                    path: entry.into_path(),
                });
            }
        }

        entries.sort_by(|a, b| a.path().cmp(b.path()));

        Ok(entries)
    }
}
