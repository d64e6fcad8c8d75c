//! Repository for the `categories` table.

use sqlx::PgPool;
use todo_core::types::DbId;

use crate::models::category::{Category, CategoryRow, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, created_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        let rows = sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Category::from))
    }

    /// Insert a new category, returning the created record.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO categories (name, color, created_at)
             VALUES ($1, $2, NOW())
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row.into())
    }

    /// Update a category. Only non-`None` fields in `input` are applied.
    ///
    /// With nothing to apply, returns the current record untouched.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                color = COALESCE($3, color)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row.map(Category::from))
    }

    /// Detach every task from the category, then delete it.
    ///
    /// The category row is locked first, so task writes referencing it
    /// either commit before the detach or wait until the delete is done.
    /// Deleting an id that does not exist is not an error. Returns the
    /// number of tasks that were detached.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SELECT 1 FROM categories WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let detached = sqlx::query("UPDATE tasks SET category_id = NULL WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(detached)
    }
}
