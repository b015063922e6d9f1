//! Error types for lesson loading and answer parsing
//!
//! Learner mistakes (a missing variable, a wrong value) are never errors; they
//! are reported inside [`crate::core::models::CheckResult`]. These variants
//! cover operational failures only.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading lessons, answers or configuration
#[derive(Debug, Error)]
pub enum LessonError {
    /// No lesson with this id exists in the catalog
    #[error("Unknown lesson: {0}. Run 'lessoncheck list' to see available lessons")]
    UnknownLesson(String),

    /// The lesson exists but has no check with this id
    #[error("Lesson '{lesson}' has no check named '{check}'")]
    UnknownCheck {
        /// Lesson id
        lesson: String,
        /// Requested check id
        check: String,
    },

    /// A lesson file is structurally invalid
    #[error("Invalid lesson in {}: {reason}", .path.display())]
    InvalidLesson {
        /// File the lesson was read from
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// A learner binding could not be understood
    #[error("Invalid binding: {0}")]
    InvalidBinding(String),

    /// A TOML file could not be parsed
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Refusing to overwrite an existing file
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// Filesystem failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LessonError {
    /// Build an [`LessonError::InvalidLesson`] for a file
    pub fn invalid_lesson(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidLesson {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
