use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::TriageError;

pub const INVALID_FILE_MESSAGE: &str = "Arquivo inválido. Use .txt ou .pdf";
pub const NO_CONTENT_MESSAGE: &str = "Nenhum conteúdo de email fornecido";
pub const EMPTY_CONTENT_MESSAGE: &str = "Não foi possível extrair conteúdo do email";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error surfaced to HTTP callers as `{"error": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{message}")]
    Upload { status: StatusCode, message: String },
    #[error("Erro no processamento: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Upload { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TriageError> for ApiError {
    fn from(error: TriageError) -> Self {
        match error {
            TriageError::UnsupportedFile(_) => ApiError::InvalidInput(INVALID_FILE_MESSAGE.into()),
            TriageError::NoContent => ApiError::InvalidInput(NO_CONTENT_MESSAGE.into()),
            TriageError::EmptyContent => ApiError::InvalidInput(EMPTY_CONTENT_MESSAGE.into()),
            TriageError::Extraction(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        ApiError::Upload {
            status: error.status(),
            message: error.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::Upload {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
