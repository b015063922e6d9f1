//! List available lessons

use lessoncheck::core::ports::LessonRepository;
use lessoncheck::output::{LessonListResult, LessonSummary};

use super::Context;

/// List every lesson in the catalog
pub fn list(ctx: &Context) -> anyhow::Result<()> {
    let lessons = ctx.catalog.list()?;
    let result = LessonListResult {
        lessons: lessons.iter().map(LessonSummary::from).collect(),
    };
    result.render(ctx.mode);
    Ok(())
}
