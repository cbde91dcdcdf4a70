use super::Config;
use crate::error::Error;
use crate::formats::sql::SqlFormat;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();

    let config = Config::load_from(&dir.path().join("sqldoc.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.src, ".");
    assert!(config.file_extension.is_empty());
    assert!(config.out.is_empty());
    assert!(!config.follow_symlinks);
    assert_eq!(config.title, "Query Documentation");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sqldoc.toml");
    fs::write(&path, "src = \"queries\"\nfollow_symlinks = true\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.src, "queries");
    assert!(config.follow_symlinks);
    assert!(config.file_extension.is_empty());
    assert_eq!(config.title, "Query Documentation");
}

#[test]
fn test_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "src = \"db\"\nfile_extension = \".psql\"\nout = \"docs/README.md\"\nfollow_symlinks = false\ntitle = \"Warehouse\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(
        config,
        Config {
            src: "db".to_string(),
            file_extension: ".psql".to_string(),
            out: "docs/README.md".to_string(),
            follow_symlinks: false,
            title: "Warehouse".to_string(),
        }
    );
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sqldoc.toml");
    fs::write(&path, "src = [unterminated").unwrap();

    match Config::load_from(&path) {
        Err(Error::Config { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected a config error, got {other:?}"),
    }
}

#[test]
fn test_default_matches_empty_toml() {
    let parsed = facet_toml::from_str::<Config>("").unwrap();

    assert_eq!(
        Config::default(),
        parsed,
        "Default must agree with the facet field defaults"
    );
}

#[test]
fn test_file_extension_falls_back_to_format() {
    let mut config = Config::default();
    assert_eq!(config.file_extension_or(&SqlFormat), ".sql");

    config.file_extension = ".psql".to_string();
    assert_eq!(config.file_extension_or(&SqlFormat), ".psql");
}
