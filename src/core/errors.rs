use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum ListingError {
    #[error("Group {0} not found")]
    GroupNotFound(String),
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Format error: {0}")]
    FormatError(String),
    #[error("Link error: {0}")]
    LinkError(String),
    #[error("Demo content error: {0}")]
    DemoContentError(String),
}
