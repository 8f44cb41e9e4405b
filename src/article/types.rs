use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::article::error::ArticleError;

pub const TITLE_MAX_CHARS: usize = 100;
pub const AUTHOR_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an article. All fields required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Partial update body. Absent fields are left untouched on the stored
/// record and are not validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl NewArticle {
    pub fn validate(&self) -> Result<(), ArticleError> {
        validate_text("title", &self.title, Some(TITLE_MAX_CHARS))?;
        validate_text("content", &self.content, None)?;
        validate_text("author", &self.author, Some(AUTHOR_MAX_CHARS))
    }
}

impl ArticleUpdate {
    pub fn validate(&self) -> Result<(), ArticleError> {
        if let Some(title) = &self.title {
            validate_text("title", title, Some(TITLE_MAX_CHARS))?;
        }
        if let Some(content) = &self.content {
            validate_text("content", content, None)?;
        }
        if let Some(author) = &self.author {
            validate_text("author", author, Some(AUTHOR_MAX_CHARS))?;
        }
        Ok(())
    }
}

// Limits are in characters, not bytes
fn validate_text(
    field: &'static str,
    value: &str,
    max_chars: Option<usize>,
) -> Result<(), ArticleError> {
    if value.is_empty() {
        return Err(ArticleError::Validation {
            field,
            reason: "must not be empty".to_string(),
        });
    }

    if let Some(max) = max_chars {
        if value.chars().count() > max {
            return Err(ArticleError::Validation {
                field,
                reason: format!("must be at most {max} characters"),
            });
        }
    }

    Ok(())
}
