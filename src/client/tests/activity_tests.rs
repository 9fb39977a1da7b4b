//! State tests for the client activity variant.

use crate::client::domain::Activity;
use rstest::rstest;

#[rstest]
fn idle_is_neither_busy_nor_failed() {
    let activity = Activity::Idle;
    assert!(!activity.is_busy());
    assert!(activity.error().is_none());
}

#[rstest]
fn busy_carries_no_error() {
    let activity = Activity::Busy;
    assert!(activity.is_busy());
    assert!(activity.error().is_none());
}

#[rstest]
fn failed_surfaces_its_message_and_is_not_busy() {
    let activity = Activity::Failed("Failed to add task".to_owned());
    assert!(!activity.is_busy());
    assert_eq!(activity.error(), Some("Failed to add task"));
}
