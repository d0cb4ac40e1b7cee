#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] crate::db::Error),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        match &self {
            Self::DatabaseError(_e) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnexpectedError(_e) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

use axum::response::{IntoResponse, Response};
use hyper::StatusCode;
