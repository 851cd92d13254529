//! Shared test fixtures

use chrono::{TimeZone, Utc};

use crate::domain::{Priority, Todo, TodoId};

/// A record created on 2025-07-06 at 09:{minute} UTC
pub fn todo(id: &str, title: &str, minute: u32, completed: bool) -> Todo {
    Todo {
        id: TodoId::new(id),
        title: title.to_string(),
        completed,
        created_at: Utc.with_ymd_and_hms(2025, 7, 6, 9, minute, 0).unwrap(),
        priority: Priority::Medium,
        category: "업무".to_string(),
        user_id: None,
    }
}

pub fn with_priority(mut todo: Todo, priority: Priority) -> Todo {
    todo.priority = priority;
    todo
}
