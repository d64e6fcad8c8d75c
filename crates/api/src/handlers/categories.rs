//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::Json;
use todo_core::error::CoreError;
use todo_core::wire::parse_id;
use todo_db::models::category::Category;
use todo_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::FormFields;
use crate::forms::CategoryForm;
use crate::response::OkResponse;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    FormFields(form): FormFields<CategoryForm>,
) -> AppResult<Json<Category>> {
    let input = form.into_create()?;
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = %category.id, "Category created");

    Ok(Json(category))
}

/// PUT /api/categories/{id}
///
/// Applies only the supplied fields. An id that is not a number cannot
/// exist and is reported as not found.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormFields(form): FormFields<CategoryForm>,
) -> AppResult<Json<Category>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: id.clone(),
        })
    };

    let db_id = parse_id(&id).ok_or_else(not_found)?;
    let category = CategoryRepo::update(&state.pool, db_id, &form.into_update())
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(category_id = db_id, "Category updated");

    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// Detaches referencing tasks, then removes the category. Always succeeds,
/// whether or not the category existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OkResponse>> {
    if let Some(db_id) = parse_id(&id) {
        let detached = CategoryRepo::delete(&state.pool, db_id).await?;
        tracing::info!(category_id = db_id, detached, "Category deleted");
    }

    Ok(Json(OkResponse::ok()))
}
