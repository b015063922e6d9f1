//! TOML parser for lesson files
//!
//! Handles reading, deserializing and validating lesson definitions.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::models::{Check, CheckKind, CheckMessages, Lesson, Value, is_identifier};
use crate::error::LessonError;

/// A lesson file structure
#[derive(Debug, Deserialize)]
pub struct LessonFile {
    /// Lesson metadata
    pub lesson: LessonHeader,

    /// Checks in this file
    #[serde(default, rename = "check")]
    pub checks: Vec<CheckEntry>,
}

/// The `[lesson]` table
#[derive(Debug, Deserialize)]
pub struct LessonHeader {
    /// Lesson id
    pub id: String,

    /// Lesson title (defaults to the id)
    #[serde(default)]
    pub title: Option<String>,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Default tolerance for numeric checks that don't set their own
    #[serde(default)]
    pub tolerance: Option<f64>,
}

/// A `[[check]]` entry
#[derive(Debug, Deserialize)]
pub struct CheckEntry {
    /// Check id
    pub id: String,

    /// Title (defaults to the id)
    #[serde(default)]
    pub title: Option<String>,

    /// Variable for a single-value check
    #[serde(default)]
    pub variable: Option<String>,

    /// Reference answer for a single-value check
    #[serde(default)]
    pub expected: Option<toml::Value>,

    /// Numeric tolerance for this check
    #[serde(default)]
    pub tolerance: Option<f64>,

    /// Variables that must all be true
    #[serde(default)]
    pub all_true: Option<Vec<String>>,

    /// Pass message override
    #[serde(default)]
    pub pass_message: Option<String>,

    /// Unbound message override
    #[serde(default)]
    pub unbound_message: Option<String>,
}

/// Load and validate a lesson file
pub fn load_file(path: &Path) -> Result<Lesson, LessonError> {
    let content = fs::read_to_string(path)?;
    parse_lesson(&content, path)
}

/// Parse and validate lesson TOML; `path` is only used in error messages
pub fn parse_lesson(content: &str, path: &Path) -> Result<Lesson, LessonError> {
    let file: LessonFile = toml::from_str(content).map_err(|source| LessonError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    file.into_lesson(path)
}

impl LessonFile {
    /// Validate the entries and build a [`Lesson`]
    pub fn into_lesson(self, path: &Path) -> Result<Lesson, LessonError> {
        let header = self.lesson;
        if header.id.trim().is_empty() {
            return Err(LessonError::invalid_lesson(path, "lesson id must not be empty"));
        }

        let mut seen = HashSet::new();
        let mut checks = Vec::with_capacity(self.checks.len());
        for entry in self.checks {
            if !seen.insert(entry.id.clone()) {
                return Err(LessonError::invalid_lesson(
                    path,
                    format!("duplicate check id '{}'", entry.id),
                ));
            }
            checks.push(entry.into_check(path, header.tolerance)?);
        }

        Ok(Lesson {
            title: header.title.unwrap_or_else(|| header.id.clone()),
            id: header.id,
            description: header.description,
            checks,
        })
    }
}

impl CheckEntry {
    fn into_check(self, path: &Path, default_tolerance: Option<f64>) -> Result<Check, LessonError> {
        let invalid = |reason: String| LessonError::invalid_lesson(path, reason);

        let kind = match (self.variable, self.expected, self.all_true) {
            (Some(variable), Some(expected), None) => {
                validate_name(&variable).map_err(|r| invalid(format!("check '{}': {r}", self.id)))?;
                let expected = Value::from_toml(&expected)
                    .map_err(|e| invalid(format!("check '{}': {e}", self.id)))?;
                CheckKind::Value {
                    variable,
                    expected,
                    tolerance: self.tolerance.or(default_tolerance),
                }
            },
            (None, None, Some(variables)) => {
                if variables.is_empty() {
                    return Err(invalid(format!("check '{}': all_true is empty", self.id)));
                }
                for name in &variables {
                    validate_name(name)
                        .map_err(|r| invalid(format!("check '{}': {r}", self.id)))?;
                }
                CheckKind::AllTrue { variables }
            },
            (Some(_), None, None) => {
                return Err(invalid(format!("check '{}': 'variable' needs 'expected'", self.id)));
            },
            (None, Some(_), None) => {
                return Err(invalid(format!("check '{}': 'expected' needs 'variable'", self.id)));
            },
            _ => {
                return Err(invalid(format!(
                    "check '{}': use either 'variable' + 'expected' or 'all_true'",
                    self.id
                )));
            },
        };

        Ok(Check {
            title: self.title.unwrap_or_else(|| self.id.clone()),
            id: self.id,
            kind,
            messages: CheckMessages {
                pass: self.pass_message,
                unbound: self.unbound_message,
            },
        })
    }
}

fn validate_name(name: &str) -> Result<(), String> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(format!("'{name}' is not a valid variable name"))
    }
}
