#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is the identifier exactly as the client sent it.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
