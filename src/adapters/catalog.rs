//! Lesson catalog
//!
//! Combines the built-in lessons with lessons found in a lessons directory.
//! A directory lesson with the same id as a built-in one replaces it.

use std::path::PathBuf;

use crate::core::models::Lesson;
use crate::core::ports::LessonRepository;
use crate::error::LessonError;

use super::builtin::BuiltinLessons;
use super::toml::TomlLessonRepository;

/// Built-in lessons plus an optional lessons directory
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    builtin: BuiltinLessons,
    dir: Option<TomlLessonRepository>,
}

impl Catalog {
    /// A catalog reading extra lessons from `lessons_dir`, if given
    #[must_use]
    pub fn new(lessons_dir: Option<PathBuf>) -> Self {
        Self {
            builtin: BuiltinLessons,
            dir: lessons_dir.map(TomlLessonRepository::new),
        }
    }
}

impl LessonRepository for Catalog {
    fn list(&self) -> Result<Vec<Lesson>, LessonError> {
        let mut lessons = self.builtin.list()?;
        let Some(dir) = &self.dir else {
            return Ok(lessons);
        };

        for lesson in dir.list()? {
            if let Some(existing) = lessons.iter_mut().find(|l| l.id == lesson.id) {
                log::debug!("Lesson {} from {} replaces built-in", lesson.id, dir.dir().display());
                *existing = lesson;
            } else {
                lessons.push(lesson);
            }
        }
        Ok(lessons)
    }
}
