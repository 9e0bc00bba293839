//! Integration tests for layered configuration loading

use crate::integration::test_utils::with_isolated_env;
use graft::config::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_when_no_config_files() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_isolated_env(&temp, || {
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.merge.source_root, PathBuf::from("unpacked"));
        assert_eq!(config.merge.subdir, "collection");
        assert_eq!(config.render.output, PathBuf::from("directory_structure.txt"));
        assert_eq!(config.logging.level, "info");
    });
}

#[test]
fn test_workspace_config_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");
    fs::create_dir_all(workspace.join("config")).unwrap();
    fs::write(
        workspace.join("config").join("config.toml"),
        "[merge]\nsubdir = \"bundle\"\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    with_isolated_env(&temp, || {
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.merge.subdir, "bundle");
        assert_eq!(config.logging.level, "debug");
        // untouched sections keep their defaults
        assert_eq!(config.merge.source_root, PathBuf::from("unpacked"));
    });
}

#[test]
fn test_env_specific_file_overrides_base() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");
    fs::create_dir_all(workspace.join("config")).unwrap();
    fs::write(
        workspace.join("config").join("config.toml"),
        "[merge]\nsubdir = \"base\"\n",
    )
    .unwrap();
    fs::write(
        workspace.join("config").join("staging.toml"),
        "[merge]\nsubdir = \"staged\"\n",
    )
    .unwrap();

    with_isolated_env(&temp, || {
        std::env::set_var("GRAFT_ENV", "staging");
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.merge.subdir, "staged");
    });
}

#[test]
fn test_global_config_applies_and_workspace_wins() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");
    fs::create_dir_all(workspace.join("config")).unwrap();
    fs::write(
        workspace.join("config").join("config.toml"),
        "[merge]\ntarget_root = \"from-workspace\"\n",
    )
    .unwrap();

    with_isolated_env(&temp, || {
        let global_dir = temp.path().join("xdg").join("graft");
        fs::create_dir_all(&global_dir).unwrap();
        fs::write(
            global_dir.join("config.toml"),
            "[merge]\nsubdir = \"global\"\ntarget_root = \"from-global\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.merge.subdir, "global");
        assert_eq!(config.merge.target_root, PathBuf::from("from-workspace"));
    });
}

#[test]
fn test_environment_variables_override_files() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");
    fs::create_dir_all(workspace.join("config")).unwrap();
    fs::write(
        workspace.join("config").join("config.toml"),
        "[merge]\nsubdir = \"from-file\"\n",
    )
    .unwrap();

    with_isolated_env(&temp, || {
        std::env::set_var("GRAFT_MERGE__SUBDIR", "from-env");
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.merge.subdir, "from-env");
    });
}

#[test]
fn test_load_from_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[merge]\nsource_root = \"elsewhere\"\n").unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.merge.source_root, PathBuf::from("elsewhere"));
}

#[test]
fn test_load_from_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp.path().join("absent.toml")).is_err());
}
