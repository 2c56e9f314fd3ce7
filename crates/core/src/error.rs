#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or missing input; the message names the offending field.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness rule was violated.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure. The message is logged, never shown to callers.
    #[error("{0}")]
    Internal(String),
}
