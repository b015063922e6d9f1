//! Check model
//!
//! A check declares: "After this activity, these variables should hold these
//! answers." Checks are authored with the lesson and never change while
//! learners are evaluated against them.

use serde::Serialize;

use super::Value;

/// How a check decides whether the learner's answer is right
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckKind {
    /// One variable compared against one expected value
    Value {
        /// Variable the learner must assign
        variable: String,
        /// Reference answer
        expected: Value,
        /// Allowed deviation for numbers; `None` means exact equality
        #[serde(skip_serializing_if = "Option::is_none")]
        tolerance: Option<f64>,
    },
    /// Several boolean variables that must all be `true`
    AllTrue {
        /// Variables the learner must make true
        variables: Vec<String>,
    },
}

/// Optional message overrides; `{name}` is replaced by the variable name(s)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckMessages {
    /// Shown when the check passes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,
    /// Shown when a variable was never defined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unbound: Option<String>,
}

/// A single learner-activity validation rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Check {
    /// Identifier within the lesson (e.g. "march-precip")
    pub id: String,

    /// Short human-readable title
    pub title: String,

    /// Comparison rule and reference answer(s)
    #[serde(flatten)]
    pub kind: CheckKind,

    /// Message overrides
    #[serde(skip_serializing_if = "is_default_messages")]
    pub messages: CheckMessages,
}

fn is_default_messages(messages: &CheckMessages) -> bool {
    *messages == CheckMessages::default()
}

impl Check {
    /// A single-value check compared exactly
    pub fn value(
        id: impl Into<String>,
        title: impl Into<String>,
        variable: impl Into<String>,
        expected: impl Into<Value>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: CheckKind::Value {
                variable: variable.into(),
                expected: expected.into(),
                tolerance: None,
            },
            messages: CheckMessages::default(),
        }
    }

    /// A check that every listed boolean variable is `true`
    pub fn all_true<I, S>(id: impl Into<String>, title: impl Into<String>, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            kind: CheckKind::AllTrue {
                variables: variables.into_iter().map(Into::into).collect(),
            },
            messages: CheckMessages::default(),
        }
    }

    /// Set the numeric tolerance (ignored for all-true checks)
    #[must_use]
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        if let CheckKind::Value { tolerance, .. } = &mut self.kind {
            *tolerance = Some(tol);
        }
        self
    }

    /// Override the pass message
    #[must_use]
    pub fn with_pass_message(mut self, message: impl Into<String>) -> Self {
        self.messages.pass = Some(message.into());
        self
    }

    /// Override the unbound-variable message
    #[must_use]
    pub fn with_unbound_message(mut self, message: impl Into<String>) -> Self {
        self.messages.unbound = Some(message.into());
        self
    }

    /// Variables this check reads, in declaration order
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        match &self.kind {
            CheckKind::Value { variable, .. } => vec![variable.as_str()],
            CheckKind::AllTrue { variables } => variables.iter().map(String::as_str).collect(),
        }
    }
}
