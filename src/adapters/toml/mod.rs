//! TOML-backed lessons and answers
//!
//! - [`parser`] - Read and validate lesson files
//! - [`repository`] - `LessonRepository` over a directory of lesson files
//! - [`answers`] - Load learner answers into bindings
//! - [`writer`] - Write answer templates for a lesson

pub mod answers;
pub mod parser;
pub mod repository;
pub mod writer;

pub use answers::{load_answers, parse_answers, parse_assignment};
pub use parser::{CheckEntry, LessonFile, LessonHeader, load_file, parse_lesson};
pub use repository::TomlLessonRepository;
pub use writer::{format_answers_template, write_answers_template};
