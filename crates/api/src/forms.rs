//! Form payloads for the category and task endpoints.
//!
//! Every field arrives as optional text. Conversion into the repository
//! DTOs is where required fields are checked and defaults are applied;
//! nothing else about the values is validated.

use serde::Deserialize;
use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_core::wire::{parse_id, DEFAULT_PRIORITY};
use todo_db::models::category::{CreateCategory, UpdateCategory};
use todo_db::models::task::{CreateTask, UpdateTask};

/// Fields accepted by `POST` and `PUT /api/categories`.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryForm {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl CategoryForm {
    pub fn into_create(self) -> Result<CreateCategory, CoreError> {
        Ok(CreateCategory {
            name: required(self.name, "Name required")?,
            color: self.color,
        })
    }

    pub fn into_update(self) -> UpdateCategory {
        UpdateCategory {
            name: self.name,
            color: self.color,
        }
    }
}

/// Fields accepted by `POST` and `PUT /api/tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct TaskForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project: Option<String>,
    pub priority: Option<String>,
    pub owner: Option<String>,
    pub category_id: Option<String>,
    pub date: Option<String>,
}

impl TaskForm {
    pub fn into_create(self) -> Result<CreateTask, CoreError> {
        Ok(CreateTask {
            title: required(self.title, "Title required")?,
            description: self.description.unwrap_or_default(),
            project: self.project.unwrap_or_default(),
            priority: self
                .priority
                .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            owner: self.owner.unwrap_or_default(),
            category_id: category_ref(self.category_id)?,
            date: non_empty(self.date),
        })
    }

    pub fn into_update(self) -> Result<UpdateTask, CoreError> {
        Ok(UpdateTask {
            title: self.title,
            description: self.description,
            project: self.project,
            priority: self.priority,
            owner: self.owner,
            category_id: category_ref(self.category_id)?,
            date: non_empty(self.date),
        })
    }
}

fn required(value: Option<String>, message: &str) -> Result<String, CoreError> {
    non_empty(value).ok_or_else(|| CoreError::Validation(message.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// An empty `category_id` means "no category"; anything else must be an id.
fn category_ref(value: Option<String>) -> Result<Option<DbId>, CoreError> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => parse_id(&raw)
            .map(Some)
            .ok_or_else(|| CoreError::Validation(format!("Invalid category_id: {raw}"))),
    }
}
