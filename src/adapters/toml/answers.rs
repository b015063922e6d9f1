//! Learner answers
//!
//! Answers are a flat TOML document whose keys are variable names:
//!
//! ```toml
//! march_precip_mm = 46.99
//! relational = true
//! ```
//!
//! Single assignments (`name=value`) use the same value syntax, so
//! `--set months='["January", "February"]'` works the same as the file.

use std::fs;
use std::path::Path;

use crate::core::models::{Bindings, Value, is_identifier};
use crate::error::LessonError;

/// Load an answers file into bindings
pub fn load_answers(path: &Path) -> Result<Bindings, LessonError> {
    let content = fs::read_to_string(path)?;
    parse_answers(&content, path)
}

/// Parse answers TOML; `path` is only used in error messages
pub fn parse_answers(content: &str, path: &Path) -> Result<Bindings, LessonError> {
    let table: toml::Table = toml::from_str(content).map_err(|source| LessonError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bindings = Bindings::new();
    for (name, raw) in &table {
        check_name(name)?;
        let value = Value::from_toml(raw)
            .map_err(|e| LessonError::InvalidBinding(format!("{name}: {e}")))?;
        bindings.insert(name.as_str(), value);
    }
    log::debug!("Loaded {} answer(s) from {}", bindings.len(), path.display());
    Ok(bindings)
}

/// Parse a `name=value` assignment
///
/// The value is read as a TOML value (`46.99`, `true`, `["a", "b"]`,
/// `"text"`). Anything that isn't valid TOML is taken as plain text, so
/// `--set month=March` binds the string `"March"`.
pub fn parse_assignment(input: &str) -> Result<(String, Value), LessonError> {
    let (name, raw) = input.split_once('=').ok_or_else(|| {
        LessonError::InvalidBinding(format!("expected NAME=VALUE, got '{input}'"))
    })?;
    let name = name.trim();
    let raw = raw.trim();
    check_name(name)?;

    if raw.is_empty() {
        return Err(LessonError::InvalidBinding(format!("{name}: missing value")));
    }
    if raw.contains(['\n', '\r']) {
        return Err(LessonError::InvalidBinding(format!(
            "{name}: value must be on a single line"
        )));
    }

    let value = match toml::from_str::<toml::Table>(&format!("value = {raw}")) {
        Ok(table) => match table.get("value") {
            Some(v) => Value::from_toml(v)
                .map_err(|e| LessonError::InvalidBinding(format!("{name}: {e}")))?,
            None => Value::Text(raw.to_string()),
        },
        Err(_) => Value::Text(raw.to_string()),
    };
    Ok((name.to_string(), value))
}

fn check_name(name: &str) -> Result<(), LessonError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(LessonError::InvalidBinding(format!("'{name}' is not a valid variable name")))
    }
}
