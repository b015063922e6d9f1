//! lessoncheck - Check learner answers for tutorial activities
//!
//! Loads the learner's variables from an answers file and `--set` arguments,
//! runs a lesson's checks and prints friendly feedback.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the lessoncheck CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
