//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`checker`] - Compare learner values with reference answers
//! - [`runner`] - Evaluate a whole lesson into a report

pub mod checker;
pub mod runner;

pub use checker::{
    check_multiple_booleans, check_single_value, evaluate, values_match, within_tolerance,
};
pub use runner::run_lesson;
