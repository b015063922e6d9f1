//! Lesson model

use serde::Serialize;

use super::Check;

/// An ordered set of checks belonging to one tutorial page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lesson {
    /// Identifier used on the command line (e.g. "operators")
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// Optional longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Checks in the order the activities appear
    pub checks: Vec<Check>,
}

impl Lesson {
    /// Create an empty lesson
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            checks: Vec::new(),
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a check
    #[must_use]
    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Find a check by id
    #[must_use]
    pub fn check(&self, id: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.id == id)
    }

    /// Every variable read by any check, first occurrence order, no duplicates
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for name in self.checks.iter().flat_map(Check::variables) {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }
}
