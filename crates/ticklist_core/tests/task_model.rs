use ticklist_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn new_task_starts_open_with_fresh_id() {
    let task = Task::new("hello");

    assert!(!task.id.is_nil());
    assert_eq!(task.text, "hello");
    assert!(!task.completed);
}

#[test]
fn toggle_is_an_involution() {
    let mut task = Task::new("flip me");

    task.toggle();
    assert!(task.completed);

    task.toggle();
    assert!(!task.completed);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "invalid").unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(task_id, "ship it").unwrap();
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["text"], "ship it");
    assert_eq!(json["completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
