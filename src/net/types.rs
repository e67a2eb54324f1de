//! Wire types exchanged with the task management API.
//!
//! Field names and enum spellings match the backend's JSON exactly
//! (notably `"In Progress"` for the in-progress task status), so these types
//! serialize straight onto the wire without mapping layers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login form payload for `POST /api/login/`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login response: the issued access token plus the staff flag.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub is_staff: bool,
}

/// Registration payload for `POST /api/register/`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The profile kept alongside the token for the logged-in user.
///
/// Built client-side after login from the decoded `user_id` claim, the
/// submitted username, and the `is_staff` flag in the login response; also
/// the shape persisted to the token store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub is_staff: bool,
}

/// A task as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub project: i64,
    pub created_by: i64,
}

/// Client-to-server task fields for create and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub project: i64,
    pub created_by: i64,
}

impl From<Task> for TaskPayload {
    fn from(task: Task) -> Self {
        Self {
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            priority: task.priority,
            status: task.status,
            project: task.project,
            created_by: task.created_by,
        }
    }
}

/// A project as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

/// Payload for `POST /api/projects/`.
#[derive(Clone, Debug, Serialize)]
pub struct NewProject {
    pub name: String,
}

/// Task priority, serialized with the backend's spellings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parse the wire/display spelling, e.g. from a `<select>` value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task status, serialized with the backend's spellings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Parse the wire/display spelling, e.g. from a `<select>` value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
