//! Lesson repository port
//!
//! Defines the interface for discovering lessons.

use crate::core::models::Lesson;
use crate::error::LessonError;

/// Source of lessons
///
/// Implementations handle loading lessons from various sources (compiled-in
/// definitions, TOML files, etc.)
pub trait LessonRepository {
    /// List every lesson this source provides
    fn list(&self) -> Result<Vec<Lesson>, LessonError>;

    /// Find a lesson by id
    fn find(&self, id: &str) -> Result<Option<Lesson>, LessonError> {
        Ok(self.list()?.into_iter().find(|l| l.id == id))
    }

    /// Find a lesson by id, failing with [`LessonError::UnknownLesson`]
    fn get(&self, id: &str) -> Result<Lesson, LessonError> {
        self.find(id)?.ok_or_else(|| LessonError::UnknownLesson(id.to_string()))
    }
}
