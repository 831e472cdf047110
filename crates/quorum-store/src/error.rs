use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation error: {0}")]
    Validation(#[from] quorum_core::error::ValidationError),

    #[error("decision not found: {0}")]
    DecisionNotFound(String),

    #[error("discussion not found: {0}")]
    DiscussionNotFound(String),

    #[error("reply not found: {0}")]
    ReplyNotFound(String),
}
