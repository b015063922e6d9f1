//! Show a lesson's checks

use lessoncheck::core::ports::LessonRepository;
use lessoncheck::output::LessonInfo;

use super::Context;

/// Show the checks of a lesson and the variables each one reads
pub fn show(ctx: &Context, lesson_id: &str) -> anyhow::Result<()> {
    let lesson = ctx.catalog.get(lesson_id)?;
    LessonInfo::from(&lesson).render(ctx.mode);
    Ok(())
}
