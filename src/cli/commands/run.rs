//! Run a lesson's checks against the learner's answers

use std::path::Path;

use lessoncheck::adapters::toml::{load_answers, parse_assignment};
use lessoncheck::core::models::Bindings;
use lessoncheck::core::ports::LessonRepository;
use lessoncheck::core::services::run_lesson;
use lessoncheck::output::render_report;

use super::Context;

/// Check the learner's answers; exits with status 1 if any check fails
pub fn run(
    ctx: &Context,
    lesson_id: &str,
    answers: Option<&Path>,
    assignments: &[String],
    only: Option<&str>,
) -> anyhow::Result<()> {
    let lesson = ctx.catalog.get(lesson_id)?;
    let bindings = collect_bindings(ctx, answers, assignments)?;

    let report = run_lesson(&lesson, &bindings, only)?;
    render_report(&report, ctx.mode);

    if !report.passed {
        std::process::exit(1);
    }
    Ok(())
}

/// Answers file first, then `--set` assignments in order
fn collect_bindings(
    ctx: &Context,
    answers: Option<&Path>,
    assignments: &[String],
) -> anyhow::Result<Bindings> {
    let mut bindings = match answers {
        Some(path) => load_answers(path)?,
        None => {
            let default = ctx.config.answers_file.as_path();
            if default.exists() {
                load_answers(default)?
            } else {
                log::debug!("No answers file at {}", default.display());
                Bindings::new()
            }
        },
    };

    for assignment in assignments {
        let (name, value) = parse_assignment(assignment)?;
        bindings.insert(name, value);
    }
    Ok(bindings)
}
