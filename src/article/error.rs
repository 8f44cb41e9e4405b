use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}
