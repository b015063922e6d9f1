//! Domain models for lessoncheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Value`] - A learner or reference value
//! - [`Binding`] / [`Bindings`] - Variables the learner defined (or didn't)
//! - [`Check`] - "This variable should hold this answer"
//! - [`Lesson`] - An ordered set of checks
//! - [`CheckResult`] - Pass/fail plus the message shown to the learner

mod binding;
mod check;
mod lesson;
mod result;
mod value;

pub use binding::{Binding, Bindings, is_identifier};
pub use check::{Check, CheckKind, CheckMessages};
pub use lesson::Lesson;
pub use result::{CheckResult, CheckStatus, LessonReport, NamedResult};
pub use value::Value;
