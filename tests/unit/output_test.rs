//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use lessoncheck::adapters::builtin::operators;
use lessoncheck::core::models::Bindings;
use lessoncheck::core::services::run_lesson;
use lessoncheck::output::{
    LessonInfo, LessonListResult, LessonSummary, OutputMode, report_to_human,
};

use crate::common::correct_operator_answers;

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Report Tests
// =============================================================================

#[test]
fn report_serialization() {
    let report = run_lesson(&operators(), &Bindings::new().with("relational", true), None).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["lesson"], "operators");
    assert_eq!(json["passed"], false);
    assert_eq!(json["results"][0]["id"], "march-precip");
    assert_eq!(json["results"][0]["status"], "unbound");
    assert_eq!(json["results"][0]["failing"][0], "march_precip_mm");
    assert_eq!(json["results"][2]["failing"].as_array().unwrap().len(), 3);
}

#[test]
fn passing_report_omits_failing() {
    let report = run_lesson(&operators(), &correct_operator_answers(), None).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["passed"], true);
    assert!(json["results"][0].get("failing").is_none());
    assert_eq!(json["results"][0]["status"], "passed");
}

#[test]
fn human_report_shows_messages_and_summary() {
    let answers = correct_operator_answers().with("march_precip_mm", 46.0);
    let report = run_lesson(&operators(), &answers, None).unwrap();
    let text = report_to_human(&report);

    assert!(text.contains("march_precip_mm should be 46.998, but it is 46.0."));
    assert!(text.contains("2 of 3 check(s) passed."));
}

// =============================================================================
// Lesson listing Tests
// =============================================================================

#[test]
fn lesson_list_human() {
    let lesson = operators();
    let result = LessonListResult {
        lessons: vec![LessonSummary::from(&lesson)],
    };
    let text = result.to_human();
    assert!(text.contains("operators"));
    assert!(text.contains("(3 checks)"));
}

#[test]
fn empty_lesson_list() {
    let result = LessonListResult { lessons: vec![] };
    assert_eq!(result.to_human(), "No lessons found.\n");
}

#[test]
fn lesson_info_hides_expected_values() {
    let info = LessonInfo::from(&operators());
    let json = serde_json::to_string(&info).unwrap();
    assert!(!json.contains("46.998"));
    assert!(json.contains("march_precip_mm"));
    assert!(json.contains("\"kind\":\"all_true\""));

    let text = info.to_human();
    assert!(text.contains("relational, identity, membership, logical must all be true"));
    assert!(text.contains("march_precip_mm  (a number)"));
}
