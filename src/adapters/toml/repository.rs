//! TOML-based lesson repository
//!
//! Implements the `LessonRepository` port over a directory of lesson files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::models::Lesson;
use crate::core::ports::LessonRepository;
use crate::error::LessonError;

use super::parser::load_file;

/// Lesson repository backed by `*.toml` files under a directory
#[derive(Debug, Clone)]
pub struct TomlLessonRepository {
    /// Directory searched recursively for lesson files
    dir: PathBuf,
}

impl TomlLessonRepository {
    /// Create a repository for the given directory
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The directory this repository reads from
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths of every lesson file, sorted
    #[must_use]
    pub fn lesson_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        files.sort();
        files
    }
}

impl LessonRepository for TomlLessonRepository {
    fn list(&self) -> Result<Vec<Lesson>, LessonError> {
        if !self.dir.is_dir() {
            log::debug!("Lessons directory {} does not exist", self.dir.display());
            return Ok(Vec::new());
        }

        let mut lessons: Vec<Lesson> = Vec::new();
        for path in self.lesson_files() {
            match load_file(&path) {
                Ok(lesson) => {
                    if lessons.iter().any(|l| l.id == lesson.id) {
                        log::warn!(
                            "Skipping {}: lesson '{}' is already defined",
                            path.display(),
                            lesson.id
                        );
                        continue;
                    }
                    log::debug!("Loaded lesson {} from {}", lesson.id, path.display());
                    lessons.push(lesson);
                },
                Err(e) => log::warn!("Skipping {}: {e}", path.display()),
            }
        }
        Ok(lessons)
    }
}
