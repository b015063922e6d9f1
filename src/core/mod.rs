//! Core domain logic for lessoncheck
//!
//! This module contains pure business logic with no I/O dependencies.
//! Lesson sources are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Value, Binding, Check, Lesson, CheckResult)
//! - `services/` - Checking and lesson evaluation
//! - `ports/` - Trait definitions for lesson sources

pub mod models;
pub mod ports;
pub mod services;
