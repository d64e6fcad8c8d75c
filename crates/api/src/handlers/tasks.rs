//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::Json;
use todo_core::error::CoreError;
use todo_core::wire::parse_id;
use todo_db::models::task::Task;
use todo_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::FormFields;
use crate::forms::TaskForm;
use crate::response::OkResponse;
use crate::state::AppState;

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    FormFields(form): FormFields<TaskForm>,
) -> AppResult<Json<Task>> {
    let input = form.into_create()?;
    let task = TaskRepo::create(&state.pool, &input).await?;

    tracing::info!(task_id = %task.id, category_id = ?input.category_id, "Task created");

    Ok(Json(task))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormFields(form): FormFields<TaskForm>,
) -> AppResult<Json<Task>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: id.clone(),
        })
    };

    let db_id = parse_id(&id).ok_or_else(not_found)?;
    let input = form.into_update()?;
    let task = TaskRepo::update(&state.pool, db_id, &input)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(task_id = db_id, "Task updated");

    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OkResponse>> {
    if let Some(db_id) = parse_id(&id) {
        let removed = TaskRepo::delete(&state.pool, db_id).await?;
        tracing::info!(task_id = db_id, removed, "Task deleted");
    }

    Ok(Json(OkResponse::ok()))
}
