//! Centralized path definitions for lessoncheck
//!
//! ```text
//! ~/.config/lessoncheck/
//! ├── config.toml               # User preferences
//! └── lessons/                  # Default lessons directory
//! ```
//!
//! The config directory can be moved with `LESSONCHECK_CONFIG_DIR`.

use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "LESSONCHECK_CONFIG_DIR";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Default answers filename, relative to the current directory
pub const ANSWERS_FILE: &str = "answers.toml";

/// Lessons subdirectory of the config directory
const LESSONS_DIR: &str = "lessons";

/// Global config directory (`~/.config/lessoncheck/`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("lessoncheck")
}

/// Global config file (`~/.config/lessoncheck/config.toml`)
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

/// Default lessons directory (`~/.config/lessoncheck/lessons/`)
#[must_use]
pub fn default_lessons_dir() -> PathBuf {
    global_config_dir().join(LESSONS_DIR)
}
