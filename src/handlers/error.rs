use crate::storage::StorageError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum_macros::AsRefStr;
use thiserror::Error;

#[derive(Debug, Error, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Malformed todo id: {0}")]
    MalformedId(String),

    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("Malformed request body")]
    MalformedBody(#[from] JsonRejection),

    #[error("Storage call timed out")]
    StorageTimeout,

    #[error("Internal storage error")]
    InternalStorage(#[source] StorageError),
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::MalformedId(id) => Self::MalformedId(id),
            _ => Self::InternalStorage(value),
        }
    }
}

impl AppError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            // a malformed id cannot address any record, so it reads as absent
            AppError::NotFound | AppError::MalformedId(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_)
            | AppError::MalformedBody(_)
            | AppError::StorageTimeout
            | AppError::InternalStorage(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Responds with the status only; error details stay in the logs.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::NOT_FOUND {
            tracing::warn!(error = %self, error_kind = self.as_ref(), "AppError");
        } else {
            tracing::error!(error = ?self, error_kind = self.as_ref(), "AppError");
        }

        status.into_response()
    }
}
