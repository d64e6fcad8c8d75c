pub mod categories;
pub mod health;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /categories        list, create
/// /categories/{id}   update, delete
/// /tasks             list, create
/// /tasks/{id}        update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/tasks", tasks::router())
}
