use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::article::ArticleError;

#[derive(Debug, Error)]
pub enum RestError {
    #[error(transparent)]
    Article(#[from] ArticleError),
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        error!("{self}");

        let status = match &self {
            RestError::Article(ArticleError::NotFound) => StatusCode::NOT_FOUND,
            RestError::Article(ArticleError::Validation { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };

        let payload = Json(json!({"message": self.to_string()}));

        (status, payload).into_response()
    }
}
