//! Lessons compiled into the binary
//!
//! Currently the operators lesson: unit conversion with arithmetic operators,
//! the `+=` assignment operator, and making relational, identity, membership
//! and logical operations return `true`.

use crate::core::models::{Check, Lesson};
use crate::core::ports::LessonRepository;
use crate::error::LessonError;

/// Id of the operators lesson
pub const OPERATORS: &str = "operators";

/// Tolerance used by the operators lesson's numeric checks
pub const OPERATORS_TOLERANCE: f64 = 1e-3;

/// Tolerance for the `+=` check; absorbs float rounding and nothing more, so
/// `46.23` and `42.65 + 3.58` both match but `42.65 + 3.6` does not
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Repository of built-in lessons
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLessons;

impl LessonRepository for BuiltinLessons {
    fn list(&self) -> Result<Vec<Lesson>, LessonError> {
        Ok(vec![operators()])
    }
}

/// The operators lesson
#[must_use]
pub fn operators() -> Lesson {
    Lesson::new(OPERATORS, "Operators")
        .with_description(
            "Arithmetic, assignment, relational, identity, membership and logical operators.",
        )
        .with_check(
            // 1.85 in * 25.4 mm/in, authored as 46.998
            Check::value("march-precip", "March precipitation in mm", "march_precip_mm", 46.998)
                .with_tolerance(OPERATORS_TOLERANCE),
        )
        .with_check(
            Check::value(
                "nyc-precip",
                "NYC annual average precipitation",
                "annual_avg_precip_nyc",
                42.65 + 3.58,
            )
            .with_tolerance(SUM_TOLERANCE)
            .with_unbound_message(
                "Could not find a variable named '{name}'. Check that your spelling is correct \
                 in your assignment of the variable!",
            ),
        )
        .with_check(Check::all_true(
            "operation-modifications",
            "Operations that return true",
            ["relational", "identity", "membership", "logical"],
        ))
}
