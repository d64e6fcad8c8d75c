use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Task routes mounted at `/tasks`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list).post(tasks::create))
        .route("/{id}", put(tasks::update).delete(tasks::delete))
}
