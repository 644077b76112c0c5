use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("invalid grade: {0} (expected 0-5)")]
    InvalidGrade(u8),
    #[error("card not found: id={0}")]
    CardNotFound(String),
    #[error("duplicate card: id={0}")]
    DuplicateCard(String),
    #[error("validation error: {0}")]
    Validation(String),
}
