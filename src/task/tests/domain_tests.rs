//! Domain-focused tests for name validation and identifier assignment.

use crate::task::domain::{Task, TaskDomainError, TaskId, TaskName};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn task_name_trims_surrounding_whitespace() {
    let name = TaskName::new(" Buy milk ").expect("valid task name");
    assert_eq!(name.as_str(), "Buy milk");
}

#[rstest]
fn task_name_keeps_interior_whitespace() {
    let name = TaskName::new("Write the quarterly report").expect("valid task name");
    assert_eq!(name.as_str(), "Write the quarterly report");
}

#[rstest]
fn task_name_rejects_empty_value() {
    assert_eq!(TaskName::new(""), Err(TaskDomainError::EmptyTaskName));
}

#[rstest]
fn task_name_rejects_whitespace_only_value() {
    assert_eq!(TaskName::new("   "), Err(TaskDomainError::EmptyTaskName));
}

#[rstest]
fn empty_name_error_carries_the_required_message() {
    let err = TaskName::new("\t\n").expect_err("blank name should be rejected");
    assert_eq!(err.to_string(), "Task name is required");
}

#[rstest]
fn first_identifier_is_one() {
    assert_eq!(TaskId::next_after(std::iter::empty()), TaskId::FIRST);
    assert_eq!(TaskId::FIRST.value(), 1);
}

#[rstest]
fn next_identifier_is_one_past_the_maximum() {
    let existing = [TaskId::new(1), TaskId::new(2), TaskId::new(3)];
    assert_eq!(TaskId::next_after(existing), TaskId::new(4));
}

#[rstest]
fn next_identifier_follows_the_maximum_not_the_count() {
    // Sparse identifier set: count-plus-one would yield 4.
    let existing = [TaskId::new(5), TaskId::new(3), TaskId::new(1)];
    assert_eq!(TaskId::next_after(existing), TaskId::new(6));
}

#[rstest]
fn task_serialises_to_flat_id_and_name() {
    let task = Task::new(
        TaskId::new(1),
        TaskName::new("Write report").expect("valid task name"),
    );
    let value = serde_json::to_value(&task).expect("task should serialise");
    assert_eq!(value, json!({"id": 1, "name": "Write report"}));
}

#[rstest]
fn task_deserialises_from_wire_shape() {
    let task: Task =
        serde_json::from_value(json!({"id": 7, "name": "Ship it"})).expect("valid wire record");
    assert_eq!(task.id(), TaskId::new(7));
    assert_eq!(task.name().as_str(), "Ship it");
}
