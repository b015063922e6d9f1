//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing lessoncheck components.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use lessoncheck::core::models::Bindings;

/// Bindings that answer every operators activity correctly
pub fn correct_operator_answers() -> Bindings {
    let march_precip_in = 1.85;
    let in_to_mm = 25.4;
    let mut annual_avg_precip_nyc = 42.65;
    let dec_avg_precip_nyc = 3.58;
    annual_avg_precip_nyc += dec_avg_precip_nyc;

    Bindings::new()
        .with("march_precip_mm", march_precip_in * in_to_mm)
        .with("annual_avg_precip_nyc", annual_avg_precip_nyc)
        .with("relational", true)
        .with("identity", true)
        .with("membership", true)
        .with("logical", true)
}

/// A temporary workspace with lessons and answers files
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace with a `lessons/` directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("lessons")).unwrap();
        Self { dir }
    }

    /// Workspace root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The lessons directory
    pub fn lessons_dir(&self) -> PathBuf {
        self.dir.path().join("lessons")
    }

    /// Write a lesson file under `lessons/`
    pub fn write_lesson(&self, name: &str, content: &str) -> PathBuf {
        let path = self.lessons_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a file relative to the workspace root
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a file relative to the workspace root
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }
}

/// A lesson file with one check of every kind
pub const LISTS_LESSON: &str = r#"
[lesson]
id = "lists"
title = "Working with lists"

[[check]]
id = "months"
title = "Months after +="
variable = "months"
expected = ["January", "February", "March", "April"]

[[check]]
id = "temps"
variable = "temp_1"
expected = [70, 68, 74]

[[check]]
id = "checks"
all_true = ["has_march", "no_july"]
pass_message = "Both membership checks return true."
"#;
