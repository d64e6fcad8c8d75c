//! Category model, wire record and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};
use todo_core::wire::{id_to_wire, text_or_default, timestamp_to_wire, DEFAULT_CATEGORY_COLOR};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: DbId,
    pub name: String,
    pub color: Option<String>,
    pub created_at: Option<Timestamp>,
}

/// A category as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: id_to_wire(row.id),
            name: row.name,
            color: text_or_default(row.color, DEFAULT_CATEGORY_COLOR),
            created_at: timestamp_to_wire(row.created_at.as_ref()),
        }
    }
}

/// DTO for creating a new category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    /// Stored as null when omitted; reported as the placeholder color.
    pub color: Option<String>,
}

/// DTO for updating a category. Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl UpdateCategory {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none()
    }
}
