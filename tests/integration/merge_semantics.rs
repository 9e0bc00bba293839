//! Integration tests for merge semantics

use graft::config::MergeConfig;
use graft::merge;
use graft::tree::walker::{Entry, Walker};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SUBDIR: &str = "bundle";

fn config(root: &Path) -> MergeConfig {
    MergeConfig {
        source_root: root.join("src"),
        target_root: root.join("dst"),
        subdir: SUBDIR.to_string(),
    }
}

/// Write a file under `src/<bundle>/bundle/<rel>`, creating parents.
fn seed_source(root: &Path, bundle: &str, rel: &str, content: &str) {
    let path = root.join("src").join(bundle).join(SUBDIR).join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Relative paths and contents of every file under `root`; directories map to None.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    let mut snap = BTreeMap::new();
    for entry in Walker::new(root.to_path_buf()).walk().unwrap() {
        let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
        match entry {
            Entry::File { ref path, .. } => {
                snap.insert(rel, Some(fs::read(path).unwrap()));
            }
            Entry::Directory { .. } => {
                snap.insert(rel, None);
            }
        }
    }
    snap
}

/// Source tree `bundle one/bundle/x.txt`, empty target: the file lands at
/// the mirrored path with identical content.
#[test]
fn test_merge_copies_missing_file() {
    let temp = TempDir::new().unwrap();
    seed_source(temp.path(), "bundle one", "x.txt", "hello");

    let outcome = merge::run(&config(temp.path()), false).unwrap();

    assert_eq!(outcome.sources_merged, 1);
    assert_eq!(outcome.files_copied, 1);
    assert_eq!(outcome.files_skipped, 0);
    let copied = temp.path().join("dst").join("x.txt");
    assert_eq!(fs::read_to_string(copied).unwrap(), "hello");
}

/// A destination file that already exists keeps its bytes; the source
/// content is discarded without comparison.
#[test]
fn test_merge_never_overwrites_existing_destination() {
    let temp = TempDir::new().unwrap();
    seed_source(temp.path(), "bundle one", "x.txt", "new content");
    fs::create_dir_all(temp.path().join("dst")).unwrap();
    fs::write(temp.path().join("dst").join("x.txt"), "old content").unwrap();

    let outcome = merge::run(&config(temp.path()), false).unwrap();

    assert_eq!(outcome.files_copied, 0);
    assert_eq!(outcome.files_skipped, 1);
    assert_eq!(
        fs::read_to_string(temp.path().join("dst").join("x.txt")).unwrap(),
        "old content"
    );
}

/// Running the merge twice leaves the destination tree exactly as one run does.
#[test]
fn test_merge_is_idempotent() {
    let temp = TempDir::new().unwrap();
    seed_source(temp.path(), "bundle one", "a.txt", "alpha");
    seed_source(temp.path(), "bundle one", "deep/b.txt", "beta");

    let first = merge::run(&config(temp.path()), false).unwrap();
    let after_first = snapshot(&temp.path().join("dst"));

    let second = merge::run(&config(temp.path()), false).unwrap();
    let after_second = snapshot(&temp.path().join("dst"));

    assert_eq!(first.files_copied, 2);
    assert_eq!(second.files_copied, 0);
    assert_eq!(second.files_skipped, 2);
    assert_eq!(after_first, after_second);
}

/// Subdirectories of the source root that do not carry the prefix are ignored.
#[test]
fn test_merge_ignores_non_matching_subdirs() {
    let temp = TempDir::new().unwrap();
    seed_source(temp.path(), "unrelated", "y.txt", "nope");

    let outcome = merge::run(&config(temp.path()), false).unwrap();

    assert_eq!(outcome.sources_merged, 0);
    assert!(!temp.path().join("dst").join("y.txt").exists());
}

/// The relative directory structure is recreated, empty directories included.
#[test]
fn test_merge_recreates_nested_structure() {
    let temp = TempDir::new().unwrap();
    seed_source(temp.path(), "bundle one", "a/b/c.txt", "deep");
    fs::create_dir_all(
        temp.path()
            .join("src")
            .join("bundle one")
            .join(SUBDIR)
            .join("hollow"),
    )
    .unwrap();

    let outcome = merge::run(&config(temp.path()), false).unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("dst").join("a").join("b").join("c.txt")).unwrap(),
        "deep"
    );
    assert!(temp.path().join("dst").join("hollow").is_dir());
    assert_eq!(outcome.dirs_created, 3);
}

/// With several matching sources, the first (name-sorted) copy of a shared
/// path wins and later ones are skipped.
#[test]
fn test_merge_first_source_wins_for_shared_paths() {
    let temp = TempDir::new().unwrap();
    seed_source(temp.path(), "bundle a", "shared.txt", "from a");
    seed_source(temp.path(), "bundle b", "shared.txt", "from b");
    seed_source(temp.path(), "bundle b", "only_b.txt", "b alone");

    let outcome = merge::run(&config(temp.path()), false).unwrap();

    assert_eq!(outcome.sources_merged, 2);
    assert_eq!(outcome.files_copied, 2);
    assert_eq!(outcome.files_skipped, 1);
    assert_eq!(
        fs::read_to_string(temp.path().join("dst").join("shared.txt")).unwrap(),
        "from a"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("dst").join("only_b.txt")).unwrap(),
        "b alone"
    );
}

/// The target root is created even when nothing matches.
#[test]
fn test_merge_creates_target_root_without_matches() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();

    let outcome = merge::run(&config(temp.path()), false).unwrap();

    assert_eq!(outcome.sources_merged, 0);
    assert!(temp.path().join("dst").is_dir());
}

/// A dry run reports counts without touching the filesystem.
#[test]
fn test_merge_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    seed_source(temp.path(), "bundle one", "a/b.txt", "content");

    let outcome = merge::run(&config(temp.path()), true).unwrap();

    assert_eq!(outcome.files_copied, 1);
    assert_eq!(outcome.dirs_created, 1);
    assert!(!temp.path().join("dst").exists());
}
