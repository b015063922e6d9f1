//! Tests for TOML lesson files and the lesson catalog

use lessoncheck::adapters::Catalog;
use lessoncheck::adapters::toml::{TomlLessonRepository, load_file};
use lessoncheck::core::models::{Bindings, CheckStatus, Value};
use lessoncheck::core::ports::LessonRepository;
use lessoncheck::core::services::run_lesson;

use crate::common::{LISTS_LESSON, TestWorkspace};

#[test]
fn lesson_file_loads_every_check() {
    let ws = TestWorkspace::new();
    let path = ws.write_lesson("lists.toml", LISTS_LESSON);

    let lesson = load_file(&path).unwrap();
    assert_eq!(lesson.title, "Working with lists");
    let ids: Vec<_> = lesson.checks.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["months", "temps", "checks"]);
    // Title falls back to the id
    assert_eq!(lesson.checks[1].title, "temps");
}

#[test]
fn lesson_file_checks_run() {
    let ws = TestWorkspace::new();
    let lesson = load_file(&ws.write_lesson("lists.toml", LISTS_LESSON)).unwrap();

    let mut months = vec!["January", "February"];
    months.extend(["March", "April"]);
    let bindings = Bindings::new()
        .with("months", Value::strings(months))
        .with("temp_1", Value::List(vec![70.0.into(), 68.0.into(), 74.0.into()]))
        .with("has_march", true)
        .with("no_july", true);

    let report = run_lesson(&lesson, &bindings, None).unwrap();
    assert!(report.passed, "{report:#?}");
    assert_eq!(report.results[2].result.message, "Both membership checks return true.");
}

#[test]
fn integer_answers_match_integer_lists_exactly() {
    let ws = TestWorkspace::new();
    let lesson = load_file(&ws.write_lesson("lists.toml", LISTS_LESSON)).unwrap();
    let bindings =
        Bindings::new().with("temp_1", Value::List(vec![70.0.into(), 68.0.into(), 75.0.into()]));

    let report = run_lesson(&lesson, &bindings, Some("temps")).unwrap();
    assert_eq!(report.results[0].result.status, CheckStatus::WrongValue);
}

#[test]
fn repository_ignores_non_lesson_files() {
    let ws = TestWorkspace::new();
    ws.write_lesson("lists.toml", LISTS_LESSON);
    ws.write_lesson("README.md", "# lessons");
    ws.write_lesson("broken.toml", "[[check]]\nid = \"x\"\n");

    let repo = TomlLessonRepository::new(ws.lessons_dir());
    let lessons = repo.list().unwrap();
    assert_eq!(lessons.len(), 1);
    assert_eq!(repo.lesson_files().len(), 2);
}

#[test]
fn catalog_lists_builtin_first() {
    let ws = TestWorkspace::new();
    ws.write_lesson("lists.toml", LISTS_LESSON);

    let catalog = Catalog::new(Some(ws.lessons_dir()));
    let ids: Vec<_> = catalog.list().unwrap().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, ["operators", "lists"]);
}
