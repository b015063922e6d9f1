//! Answer template writer
//!
//! Writes a starter answers file for a lesson. Single-value answers are left
//! commented out so they stay unbound until the learner fills them in;
//! all-true variables start as `false`.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::core::models::{CheckKind, Lesson};
use crate::error::LessonError;

/// Format an answers template for `lesson`
#[must_use]
pub fn format_answers_template(lesson: &Lesson) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Answers for {} ({})", lesson.title, lesson.id);
    let _ = writeln!(out, "# Fill in each value, then run: lessoncheck run {}", lesson.id);

    let mut written: Vec<&str> = Vec::new();
    for check in &lesson.checks {
        out.push('\n');
        let _ = writeln!(out, "# {} [{}]", check.title, check.id);
        match &check.kind {
            CheckKind::Value {
                variable, expected, ..
            } => {
                if written.contains(&variable.as_str()) {
                    continue;
                }
                written.push(variable);
                let _ = writeln!(out, "# {variable} =    ({})", expected.kind());
            },
            CheckKind::AllTrue { variables } => {
                for variable in variables {
                    if written.contains(&variable.as_str()) {
                        continue;
                    }
                    written.push(variable);
                    let _ = writeln!(out, "{variable} = false");
                }
            },
        }
    }

    out
}

/// Write an answers template, refusing to overwrite unless `force`
pub fn write_answers_template(lesson: &Lesson, path: &Path, force: bool) -> Result<(), LessonError> {
    if path.exists() && !force {
        return Err(LessonError::AlreadyExists(path.to_path_buf()));
    }
    fs::write(path, format_answers_template(lesson))?;
    log::debug!("Wrote answers template for {} to {}", lesson.id, path.display());
    Ok(())
}
