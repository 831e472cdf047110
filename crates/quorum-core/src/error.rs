use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("description must not be empty")]
    EmptyDescription,

    #[error("content must not be empty")]
    EmptyContent,

    #[error("confidence must be between 1 and 10, got {0}")]
    ConfidenceOutOfRange(u8),

    #[error("deadline {deadline} is earlier than creation time {created_at}")]
    DeadlineBeforeCreation {
        deadline: DateTime<Utc>,
        created_at: DateTime<Utc>,
    },
}
