use thiserror::Error;

/// Validation errors raised when a record enters the data model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(i64),
    #[error("Rating must be between 0 and 5, got {0}")]
    RatingOutOfRange(i64),
    #[error("Page count must be positive, got {0}")]
    InvalidPageCount(i64),
    #[error("Invalid {field} date '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("Duplicate note id {0}")]
    DuplicateNoteId(i64),
}
