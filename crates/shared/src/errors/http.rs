use crate::errors::{error::ErrorResponse, repository::RepositoryError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
            RepositoryError::Sqlx(e) => HttpError::Internal(format!("Database error: {e}")),
            RepositoryError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl From<askama::Error> for HttpError {
    fn from(err: askama::Error) -> Self {
        HttpError::Internal(format!("Template rendering failed: {err}"))
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            // Client-facing outcomes carry no body, matching the wire
            // contract for 400/404.
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST.into_response(),
            HttpError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            HttpError::Internal(msg) => {
                let body = Json(ErrorResponse {
                    status: "error".into(),
                    message: msg,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
