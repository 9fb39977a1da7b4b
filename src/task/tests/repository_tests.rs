//! Concurrency tests for the in-memory repository.

use std::collections::HashSet;
use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository, domain::TaskName, ports::TaskRepository,
};
use rstest::rstest;
use tokio::task::JoinSet;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_appends_assign_dense_unique_identifiers() {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let mut appends = JoinSet::new();

    for index in 0..32_u64 {
        let worker = Arc::clone(&repository);
        appends.spawn(async move {
            let name = TaskName::new(format!("task {index}")).expect("valid task name");
            worker.append(name).await.expect("append should succeed")
        });
    }

    let mut ids = HashSet::new();
    while let Some(joined) = appends.join_next().await {
        let appended = joined.expect("append task should not panic");
        assert!(
            ids.insert(appended.id().value()),
            "identifier assigned twice"
        );
    }

    let expected: HashSet<u64> = (1..=32).collect();
    assert_eq!(ids, expected);

    let stored = repository.list().await.expect("listing should succeed");
    assert_eq!(stored.len(), 32);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_snapshots_are_independent_of_later_appends() {
    let repository = InMemoryTaskRepository::new();
    let first = TaskName::new("first").expect("valid task name");
    repository.append(first).await.expect("append should succeed");

    let snapshot = repository.list().await.expect("listing should succeed");

    let second = TaskName::new("second").expect("valid task name");
    repository
        .append(second)
        .await
        .expect("append should succeed");

    assert_eq!(snapshot.len(), 1);
    let current = repository.list().await.expect("listing should succeed");
    assert_eq!(current.len(), 2);
}
