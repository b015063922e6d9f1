//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CheckKind, CheckStatus, Lesson, LessonReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of a lesson for `list`
#[derive(Debug, Serialize)]
pub struct LessonSummary {
    /// Lesson id
    pub id: String,
    /// Lesson title
    pub title: String,
    /// Number of checks
    pub checks: usize,
}

/// Result of a lesson list operation
#[derive(Debug, Serialize)]
pub struct LessonListResult {
    /// Available lessons
    pub lessons: Vec<LessonSummary>,
}

/// What a check reads, without revealing the answer
#[derive(Debug, Serialize)]
pub struct CheckInfo {
    /// Check id
    pub id: String,
    /// Check title
    pub title: String,
    /// "value" or "all_true"
    pub kind: &'static str,
    /// Variables the learner must assign
    pub variables: Vec<String>,
    /// Kind of value expected, for single-value checks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expects: Option<&'static str>,
}

/// Result of a lesson show operation
#[derive(Debug, Serialize)]
pub struct LessonInfo {
    /// Lesson id
    pub id: String,
    /// Lesson title
    pub title: String,
    /// Lesson description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Checks in lesson order
    pub checks: Vec<CheckInfo>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

impl From<&Lesson> for LessonSummary {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            checks: lesson.checks.len(),
        }
    }
}

impl From<&Lesson> for LessonInfo {
    fn from(lesson: &Lesson) -> Self {
        let checks = lesson
            .checks
            .iter()
            .map(|check| {
                let (kind, expects) = match &check.kind {
                    CheckKind::Value { expected, .. } => ("value", Some(expected.kind())),
                    CheckKind::AllTrue { .. } => ("all_true", None),
                };
                CheckInfo {
                    id: check.id.clone(),
                    title: check.title.clone(),
                    kind,
                    variables: check.variables().into_iter().map(String::from).collect(),
                    expects,
                }
            })
            .collect();
        Self {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            checks,
        }
    }
}

impl LessonListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", to_json(self)),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.lessons.is_empty() {
            return "No lessons found.\n".to_string();
        }

        let width = self.lessons.iter().map(|l| l.id.len()).max().unwrap_or(0);
        let mut out = String::from("Lessons:\n\n");
        for l in &self.lessons {
            let id = format!("{:<width$}", l.id);
            let _ = writeln!(out, "  {}  {} ({} checks)", id.bold(), l.title, l.checks);
        }
        out
    }
}

impl LessonInfo {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", to_json(self)),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", self.title.bold(), self.id);
        if let Some(description) = &self.description {
            let _ = writeln!(out, "{description}");
        }
        out.push('\n');

        for c in &self.checks {
            let _ = writeln!(out, "  [{}] {}", c.id, c.title);
            match c.expects {
                Some(kind) => {
                    let _ = writeln!(out, "      {}  ({kind})", c.variables.join(", "));
                },
                None => {
                    let _ =
                        writeln!(out, "      {} must all be true", c.variables.join(", "));
                },
            }
        }
        out
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => println!("{}", to_json(self)),
        }
    }
}

/// Render a lesson report based on output mode
pub fn render_report(report: &LessonReport, mode: OutputMode) {
    match mode {
        OutputMode::Human => print!("{}", report_to_human(report)),
        OutputMode::Json => println!("{}", to_json(report)),
    }
}

/// Human-readable text for a lesson report
#[must_use]
pub fn report_to_human(report: &LessonReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})\n", report.title.bold(), report.lesson);

    let width = report.results.iter().map(|r| r.id.len()).max().unwrap_or(0);
    for r in &report.results {
        let mark = match r.result.status {
            CheckStatus::Passed => "✓".green(),
            CheckStatus::WrongValue => "✗".red(),
            CheckStatus::Unbound => "?".yellow(),
        };
        let _ = writeln!(out, "  {mark} {:<width$}  {}", r.id, r.result.message);
    }

    let total = report.results.len();
    let passed = report.passed_count();
    out.push('\n');
    if report.passed {
        let _ = writeln!(out, "{}", format!("All {total} check(s) passed.").green().bold());
    } else {
        let _ = writeln!(out, "{passed} of {total} check(s) passed.");
    }
    out
}
