//! Global configuration management
//!
//! Config is stored at `~/.config/lessoncheck/config.toml` (XDG standard).
//! A missing or unreadable file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global lessoncheck configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Directory with extra lesson files (defaults to `<config dir>/lessons`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_dir: Option<PathBuf>,

    /// Answers file `run` reads when `--answers` isn't given
    #[serde(default = "default_answers_file")]
    pub answers_file: PathBuf,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_answers_file() -> PathBuf {
    PathBuf::from(paths::ANSWERS_FILE)
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            lessons_dir: None,
            answers_file: default_answers_file(),
            ui: UiConfig::default(),
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UiConfig {
    /// Colour human-readable output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if it doesn't exist or can't be parsed
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::warn!("Could not read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// The lessons directory to use, preferring an explicit override
    #[must_use]
    pub fn lessons_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.lessons_dir.clone())
            .unwrap_or_else(paths::default_lessons_dir)
    }
}
