//! Task model, wire record and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use todo_core::types::{CalendarDate, DbId, Timestamp};
use todo_core::wire::{
    date_to_wire, id_to_wire, text_or_default, text_or_empty, timestamp_to_wire, DEFAULT_PRIORITY,
};

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub project: Option<String>,
    pub priority: Option<String>,
    pub owner: Option<String>,
    pub category_id: Option<DbId>,
    pub date: Option<CalendarDate>,
    pub created_at: Option<Timestamp>,
}

/// A task as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub project: String,
    pub priority: String,
    pub owner: String,
    pub category_id: Option<String>,
    pub date: Option<String>,
    pub created_at: Option<String>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: id_to_wire(row.id),
            title: row.title,
            description: text_or_empty(row.description),
            project: text_or_empty(row.project),
            priority: text_or_default(row.priority, DEFAULT_PRIORITY),
            owner: text_or_empty(row.owner),
            category_id: row.category_id.map(id_to_wire),
            date: date_to_wire(row.date.as_ref()),
            created_at: timestamp_to_wire(row.created_at.as_ref()),
        }
    }
}

/// DTO for creating a new task. Defaults are applied by the caller.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub project: String,
    pub priority: String,
    pub owner: String,
    pub category_id: Option<DbId>,
    /// ISO-8601 date text; the `DATE` column parses it.
    pub date: Option<String>,
}

impl CreateTask {
    /// A task with only a title and every other field at its default.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            project: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            owner: String::new(),
            category_id: None,
            date: None,
        }
    }
}

/// DTO for updating a task. Only `Some` fields are written.
///
/// The field set is the complete list of mutable task columns.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project: Option<String>,
    pub priority: Option<String>,
    pub owner: Option<String>,
    pub category_id: Option<DbId>,
    pub date: Option<String>,
}

impl UpdateTask {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.project.is_none()
            && self.priority.is_none()
            && self.owner.is_none()
            && self.category_id.is_none()
            && self.date.is_none()
    }
}
