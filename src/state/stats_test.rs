use super::*;
use crate::net::types::TaskPriority;

fn task(id: i64, status: TaskStatus) -> Task {
    Task {
        id,
        title: format!("task {id}"),
        description: String::new(),
        due_date: "2026-01-01".to_owned(),
        priority: TaskPriority::Medium,
        status,
        project: 1,
        created_by: 1,
    }
}

#[test]
fn stats_default_all_zero() {
    let stats = TaskStats::default();
    assert_eq!(stats, TaskStats::compute(&[], &[]));
}

#[test]
fn stats_count_by_status() {
    let tasks = [
        task(1, TaskStatus::Pending),
        task(2, TaskStatus::InProgress),
        task(3, TaskStatus::Completed),
        task(4, TaskStatus::Completed),
    ];
    let projects = [Project {
        id: 1,
        name: "alpha".to_owned(),
    }];

    let stats = TaskStats::compute(&tasks, &projects);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.projects, 1);
}

#[test]
fn pending_tasks_count_toward_total_only() {
    let tasks = [task(1, TaskStatus::Pending), task(2, TaskStatus::Pending)];
    let stats = TaskStats::compute(&tasks, &[]);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.in_progress, 0);
}
