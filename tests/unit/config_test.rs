//! Tests for global configuration management

use std::path::{Path, PathBuf};

use lessoncheck::config::GlobalConfig;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = GlobalConfig::default();
    assert!(config.ui.color);
    assert!(config.lessons_dir.is_none());
    assert_eq!(config.answers_file, PathBuf::from("answers.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&temp.path().join("config.toml"));
    assert_eq!(config.answers_file, PathBuf::from("answers.toml"));
}

#[test]
fn test_invalid_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "lessons_dir = [").unwrap();
    let config = GlobalConfig::load_from(&path);
    assert!(config.lessons_dir.is_none());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[ui]\ncolor = false\n").unwrap();
    let config = GlobalConfig::load_from(&path);
    assert!(!config.ui.color);
    assert_eq!(config.answers_file, PathBuf::from("answers.toml"));
}

#[test]
fn test_load_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        "lessons_dir = \"/srv/lessons\"\nanswers_file = \"my-answers.toml\"\n[ui]\ncolor = false\n",
    )
    .unwrap();

    let loaded = GlobalConfig::load_from(&path);
    assert_eq!(loaded.lessons_dir, Some(PathBuf::from("/srv/lessons")));
    assert_eq!(loaded.answers_file, PathBuf::from("my-answers.toml"));
    assert!(!loaded.ui.color);
}

#[test]
fn test_lessons_dir_override_wins() {
    let mut config = GlobalConfig::default();
    config.lessons_dir = Some(PathBuf::from("/from/config"));
    assert_eq!(config.lessons_dir(None), PathBuf::from("/from/config"));
    assert_eq!(config.lessons_dir(Some(Path::new("/from/flag"))), PathBuf::from("/from/flag"));
}
