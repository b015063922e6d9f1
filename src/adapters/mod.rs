//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `builtin` - Lessons compiled into the binary
//! - `toml/` - Lesson files, learner answers and answer templates
//! - `catalog` - Built-in and on-disk lessons combined

pub mod builtin;
pub mod catalog;
pub mod toml;

pub use builtin::BuiltinLessons;
pub use catalog::Catalog;
