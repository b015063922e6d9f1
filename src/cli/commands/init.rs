//! Write an answers template for a lesson

use std::path::Path;

use lessoncheck::adapters::toml::write_answers_template;
use lessoncheck::core::ports::LessonRepository;
use lessoncheck::output::OperationResult;

use super::Context;

/// Write a starter answers file for `lesson_id`
pub fn init(
    ctx: &Context,
    lesson_id: &str,
    output: Option<&Path>,
    force: bool,
) -> anyhow::Result<()> {
    let lesson = ctx.catalog.get(lesson_id)?;
    let path = output.unwrap_or(ctx.config.answers_file.as_path());

    write_answers_template(&lesson, path, force)?;

    OperationResult {
        success: true,
        message: format!("Created {} for lesson {}", path.display(), lesson.id),
    }
    .render(ctx.mode);
    Ok(())
}
