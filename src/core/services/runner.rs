//! Lesson runner - evaluates a lesson's checks into a report

use crate::core::models::{Bindings, Lesson, LessonReport, NamedResult};
use crate::error::LessonError;

use super::checker::evaluate;

/// Evaluate the checks of `lesson` against the learner's bindings
///
/// With `only`, just that check is evaluated; an id the lesson doesn't have is
/// an [`LessonError::UnknownCheck`].
pub fn run_lesson(
    lesson: &Lesson,
    bindings: &Bindings,
    only: Option<&str>,
) -> Result<LessonReport, LessonError> {
    let checks: Vec<_> = match only {
        Some(id) => {
            let check = lesson.check(id).ok_or_else(|| LessonError::UnknownCheck {
                lesson: lesson.id.clone(),
                check: id.to_string(),
            })?;
            vec![check]
        },
        None => lesson.checks.iter().collect(),
    };

    log::debug!(
        "Running {} check(s) of lesson {} against {} binding(s)",
        checks.len(),
        lesson.id,
        bindings.len()
    );

    let results = checks
        .into_iter()
        .map(|check| NamedResult {
            id: check.id.clone(),
            title: check.title.clone(),
            result: evaluate(check, bindings),
        })
        .collect();

    Ok(LessonReport::new(lesson.id.clone(), lesson.title.clone(), results))
}
