//! Directory tree merging
//!
//! Scans a source root for subdirectories whose names start with a prefix,
//! descends into the fixed-named nested subfolder of each, and mirrors its
//! contents beneath the target root. A file is copied only when nothing
//! exists at its mirrored path; existing destination files are never touched
//! or compared.

use crate::config::MergeConfig;
use crate::error::GraftError;
use crate::tree::path;
use crate::tree::walker::{Entry, Walker};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counts from a merge run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Source subdirectories that matched the prefix and held the nested subfolder
    pub sources_merged: usize,
    /// Files copied to the target tree
    pub files_copied: usize,
    /// Files skipped because the destination already existed
    pub files_skipped: usize,
    /// Target directories newly created
    pub dirs_created: usize,
}

/// Merge matching source subdirectories into the target root.
///
/// The target root is created up front. With `dry_run`, nothing is written
/// and the outcome reports what a real run would have done. Filesystem
/// errors propagate and abort the merge.
pub fn run(config: &MergeConfig, dry_run: bool) -> Result<MergeOutcome, GraftError> {
    let mut outcome = MergeOutcome::default();

    if !dry_run {
        fs::create_dir_all(&config.target_root)?;
    }

    let source_root = path::canonicalize_path(&config.source_root)?;
    let target_root = if config.target_root.exists() {
        path::canonicalize_path(&config.target_root)?
    } else {
        config.target_root.clone()
    };

    for matched in matching_subdirs(&source_root, &config.subdir)? {
        let nested = matched.join(&config.subdir);
        if !nested.is_dir() {
            debug!(source = %matched.display(), "no nested subfolder, skipping");
            continue;
        }

        outcome.sources_merged += 1;
        merge_nested(&nested, &target_root, dry_run, &mut outcome)?;
    }

    info!(
        sources = outcome.sources_merged,
        copied = outcome.files_copied,
        skipped = outcome.files_skipped,
        "merge finished"
    );

    Ok(outcome)
}

/// Immediate subdirectories of `root` whose names start with `prefix`,
/// sorted by name for a stable merge order.
fn matching_subdirs(root: &Path, prefix: &str) -> Result<Vec<PathBuf>, GraftError> {
    let mut matches = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with(prefix) {
            matches.push(entry.path());
        }
    }

    matches.sort();
    Ok(matches)
}

/// Mirror one nested source folder beneath the target root.
fn merge_nested(
    nested: &Path,
    target_root: &Path,
    dry_run: bool,
    outcome: &mut MergeOutcome,
) -> Result<(), GraftError> {
    for entry in Walker::new(nested.to_path_buf()).walk()? {
        match entry {
            Entry::Directory { path: dir } => {
                let rel = path::relative_to(&dir, nested)?;
                let target_dir = target_root.join(rel);
                if !target_dir.exists() {
                    if !dry_run {
                        fs::create_dir_all(&target_dir)?;
                    }
                    outcome.dirs_created += 1;
                }
            }
            Entry::File { path: file, .. } => {
                let rel = path::relative_to(&file, nested)?;
                let target_file = target_root.join(rel);

                if target_file.exists() {
                    debug!(target = %target_file.display(), "destination exists, skipping");
                    outcome.files_skipped += 1;
                    continue;
                }

                if dry_run {
                    debug!(
                        source = %file.display(),
                        target = %target_file.display(),
                        "would copy"
                    );
                } else {
                    if let Some(parent) = target_file.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::copy(&file, &target_file)?;
                    info!(
                        source = %file.display(),
                        target = %target_file.display(),
                        "copied"
                    );
                }
                outcome.files_copied += 1;
            }
        }
    }

    Ok(())
}
