//! HTTP error type and its mapping to responses.
//!
//! # Design
//! Handlers return `Result<_, ApiError>`. Store errors and JSON body
//! rejections convert through `From`, so `?` is enough at every call site.
//! Error bodies are a small problem-details object; internal error details
//! are logged and never sent to the client.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404: the addressed item does not exist.
    #[error("not found")]
    NotFound,

    /// 400: malformed body or path/body id mismatch.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 500
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: &'static str,
    pub title: &'static str,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::IdMismatch { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (title, detail) = match self {
            ApiError::NotFound => ("Not Found", None),
            ApiError::BadRequest(msg) => ("Bad Request", Some(msg)),
            ApiError::Internal(err) => {
                tracing::error!("internal error: {err:?}");
                ("Internal Server Error", None)
            }
        };

        let body = ErrorResponse {
            error_type: "about:blank",
            title,
            status: status.as_u16(),
            detail,
        };
        (status, Json(body)).into_response()
    }
}
