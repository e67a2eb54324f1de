//! Dashboard aggregates computed client-side from the fetched lists.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::{Project, Task, TaskStatus};

/// Figures shown on the dashboard stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub projects: usize,
}

impl TaskStats {
    pub fn compute(tasks: &[Task], projects: &[Project]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
            in_progress: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count(),
            projects: projects.len(),
        }
    }
}
