//! Repository for the `tasks` table.

use sqlx::PgPool;
use todo_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskRow, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, project, priority, owner, category_id, date, created_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List every task, newest first. Rows without a creation time sort
    /// last; ties break on id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC NULLS LAST, id");
        let rows = sqlx::query_as::<_, TaskRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Task::from))
    }

    /// Insert a new task, returning the created record.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO tasks
                (title, description, project, priority, owner, category_id, date, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7::date, NOW())
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.project)
            .bind(&input.priority)
            .bind(&input.owner)
            .bind(input.category_id)
            .bind(&input.date)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row.into())
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// With nothing to apply, returns the current record untouched.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                project = COALESCE($4, project),
                priority = COALESCE($5, priority),
                owner = COALESCE($6, owner),
                category_id = COALESCE($7, category_id),
                date = COALESCE($8::date, date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.project)
            .bind(&input.priority)
            .bind(&input.owner)
            .bind(input.category_id)
            .bind(&input.date)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row.map(Task::from))
    }

    /// Delete a task by ID. Deleting an id that does not exist is not an
    /// error; returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
