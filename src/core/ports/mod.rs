//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between core logic and wherever lessons
//! come from (compiled-in lessons, TOML files on disk).
//!
//! Implementations live in the `adapters` module.

mod lesson_repo;

pub use lesson_repo::LessonRepository;
