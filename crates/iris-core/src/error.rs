use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid field path: {0}")]
    InvalidFieldPath(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("exam {0} is already completed")]
    ExamAlreadyCompleted(uuid::Uuid),
}
