//! Check results
//!
//! A result carries the outcome kind and the message meant for direct display
//! to the learner. Unbound and wrong-value failures are separate variants.

use serde::Serialize;

/// Outcome of evaluating one check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Every compared value matched
    Passed,
    /// A variable exists but holds the wrong value
    WrongValue,
    /// A variable was never defined
    Unbound,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::WrongValue => write!(f, "wrong value"),
            Self::Unbound => write!(f, "not found"),
        }
    }
}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Outcome kind
    pub status: CheckStatus,
    /// Message for the learner
    pub message: String,
    /// Variables that were wrong or missing (empty when passed)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failing: Vec<String>,
}

impl CheckResult {
    /// A passing result
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Passed,
            message: message.into(),
            failing: Vec::new(),
        }
    }

    /// A wrong-value result naming the offending variables
    pub fn wrong(message: impl Into<String>, failing: Vec<String>) -> Self {
        Self {
            status: CheckStatus::WrongValue,
            message: message.into(),
            failing,
        }
    }

    /// An unbound-name result naming the missing variables
    pub fn unbound(message: impl Into<String>, missing: Vec<String>) -> Self {
        Self {
            status: CheckStatus::Unbound,
            message: message.into(),
            failing: missing,
        }
    }

    /// Whether the check passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}

/// A check result tagged with the check it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedResult {
    /// Check id
    pub id: String,
    /// Check title
    pub title: String,
    /// The result
    #[serde(flatten)]
    pub result: CheckResult,
}

/// Results of running a lesson's checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonReport {
    /// Lesson id
    pub lesson: String,
    /// Lesson title
    pub title: String,
    /// Whether every evaluated check passed
    pub passed: bool,
    /// Per-check results in lesson order
    pub results: Vec<NamedResult>,
}

impl LessonReport {
    /// Build a report, deriving `passed` from the results
    #[must_use]
    pub fn new(lesson: String, title: String, results: Vec<NamedResult>) -> Self {
        let passed = results.iter().all(|r| r.result.passed());
        Self {
            lesson,
            title,
            passed,
            results,
        }
    }

    /// Number of passing checks
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.result.passed()).count()
    }

    /// Number of checks with the given status
    #[must_use]
    pub fn count(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|r| r.result.status == status).count()
    }
}
