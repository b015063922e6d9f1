//! Learner variable bindings
//!
//! A learner's answers are a namespace of variable names. Looking up a name that
//! was never assigned yields `None`, which the checker reports as unbound rather
//! than as a wrong value.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::Value;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

/// Whether `name` is a valid variable name
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// A variable name and whatever the learner bound to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    /// Variable name
    pub name: String,
    /// The value, or `None` if the learner never defined the variable
    pub value: Option<Value>,
}

impl Binding {
    /// A variable that holds a value
    pub fn bound(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A variable that was never defined
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Whether the variable was defined
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.value.is_some()
    }
}

/// The learner's namespace: every variable they assigned
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bindings {
    vars: BTreeMap<String, Value>,
}

impl Bindings {
    /// Create an empty namespace
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a variable, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Builder-style [`Bindings::insert`]
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a variable
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Look up a variable as a [`Binding`]
    #[must_use]
    pub fn binding(&self, name: &str) -> Binding {
        Binding {
            name: name.to_string(),
            value: self.get(name).cloned(),
        }
    }

    /// Apply every assignment in `other`, later values win
    pub fn merge(&mut self, other: Self) {
        self.vars.extend(other.vars);
    }

    /// Variable names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Number of assigned variables
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether nothing has been assigned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Bindings {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut bindings = Self::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}
