//! Learner and reference values
//!
//! Lessons only ever compare a handful of shapes: numbers, booleans, text and
//! lists of those. TOML integers and floats both become [`Value::Number`].

use serde::Serialize;

use crate::error::LessonError;

/// A value bound to a variable, or the reference answer for one
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer or floating-point number
    Number(f64),
    /// `true` or `false`
    Bool(bool),
    /// A string
    Text(String),
    /// An ordered sequence of values
    List(Vec<Self>),
}

impl Value {
    /// Build a list of text values
    #[must_use]
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(|s| Self::Text(s.into())).collect())
    }

    /// Convert a TOML value into a [`Value`]
    ///
    /// Tables and datetimes have no meaning in a lesson and are rejected.
    pub fn from_toml(value: &toml::Value) -> Result<Self, LessonError> {
        match value {
            #[allow(clippy::cast_precision_loss)]
            toml::Value::Integer(i) => Ok(Self::Number(*i as f64)),
            toml::Value::Float(f) => Ok(Self::Number(*f)),
            toml::Value::Boolean(b) => Ok(Self::Bool(*b)),
            toml::Value::String(s) => Ok(Self::Text(s.clone())),
            toml::Value::Array(items) => {
                items.iter().map(Self::from_toml).collect::<Result<Vec<_>, _>>().map(Self::List)
            },
            toml::Value::Table(_) => {
                Err(LessonError::InvalidBinding("tables are not supported as values".to_string()))
            },
            toml::Value::Datetime(dt) => {
                Err(LessonError::InvalidBinding(format!("dates are not supported as values: {dt}")))
            },
        }
    }

    /// The boolean inside, if this is a [`Value::Bool`]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short description of the kind of value, used in feedback
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "a number",
            Self::Bool(_) => "true or false",
            Self::Text(_) => "text",
            Self::List(_) => "a list",
        }
    }

    /// Whether `other` has the same kind of value as `self`
    #[must_use]
    pub const fn same_kind(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Number(_), Self::Number(_))
                | (Self::Bool(_), Self::Bool(_))
                | (Self::Text(_), Self::Text(_))
                | (Self::List(_), Self::List(_))
        )
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
        }
    }
}

/// At most 10 decimals, trailing zeros trimmed, whole numbers keep ".0"
///
/// Falls back to the shortest exact form when rounding would change the
/// number by more than float noise, e.g. `1e-11` never prints as `0.0`.
fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let fixed = format!("{n:.10}");
    let rounded: f64 = fixed.parse().unwrap_or(n);
    if (rounded - n).abs() > n.abs() * 1e-12 {
        return n.to_string();
    }
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}
