use super::*;

// =============================================================
// Enum wire spellings
// =============================================================

#[test]
fn status_serializes_with_backend_spelling() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::InProgress).unwrap(),
        "\"In Progress\""
    );
    assert_eq!(
        serde_json::to_string(&TaskStatus::Pending).unwrap(),
        "\"Pending\""
    );
}

#[test]
fn status_deserializes_backend_spelling() {
    let status: TaskStatus = serde_json::from_str("\"In Progress\"").unwrap();
    assert_eq!(status, TaskStatus::InProgress);
}

#[test]
fn priority_parse_round_trips_all_variants() {
    for priority in TaskPriority::ALL {
        assert_eq!(TaskPriority::parse(priority.as_str()), Some(priority));
    }
    assert_eq!(TaskPriority::parse("urgent"), None);
}

#[test]
fn status_parse_round_trips_all_variants() {
    for status in TaskStatus::ALL {
        assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(TaskStatus::parse("Done"), None);
}

#[test]
fn defaults_match_form_defaults() {
    assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    assert_eq!(TaskStatus::default(), TaskStatus::Pending);
}

#[test]
fn display_matches_wire_spelling() {
    assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
    assert_eq!(TaskPriority::High.to_string(), "High");
}

// =============================================================
// Task shapes
// =============================================================

#[test]
fn task_deserializes_backend_shape() {
    let json = r#"{
        "id": 3,
        "title": "Write report",
        "description": "Quarterly summary",
        "due_date": "2026-03-01",
        "priority": "High",
        "status": "In Progress",
        "project": 2,
        "created_by": 42
    }"#;
    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.id, 3);
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.project, 2);
}

#[test]
fn payload_from_task_drops_only_the_id() {
    let task = Task {
        id: 9,
        title: "t".to_owned(),
        description: "d".to_owned(),
        due_date: "2026-01-15".to_owned(),
        priority: TaskPriority::Low,
        status: TaskStatus::Completed,
        project: 4,
        created_by: 7,
    };
    let payload = TaskPayload::from(task.clone());
    assert_eq!(payload.title, task.title);
    assert_eq!(payload.status, task.status);
    assert_eq!(payload.created_by, task.created_by);

    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["due_date"], "2026-01-15");
}

#[test]
fn user_profile_round_trips_through_json() {
    let user = UserProfile {
        id: 42,
        username: "alice".to_owned(),
        is_staff: false,
    };
    let json = serde_json::to_string(&user).unwrap();
    let back: UserProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}
