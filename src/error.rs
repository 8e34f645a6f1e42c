use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum VaultError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("No connection profile at ordinal {0}")]
    UnknownProfile(usize),

    #[error("Unknown password restriction: {0}")]
    UnknownRestriction(String),

    #[error("Restriction {0} is built in and cannot be deleted")]
    ProtectedRestriction(String),

    #[error("No generated password to apply")]
    NoGeneratedPassword,
}

impl IntoResponse for VaultError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            VaultError::Database(_) => {
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            VaultError::UnknownRestriction(id) => {
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("No password restriction with id {id}."),
                };
                (StatusCode::NOT_FOUND, body)
            }
            VaultError::ProtectedRestriction(id) => {
                let body = ApiErrorBody {
                    code: "PROTECTED".to_string(),
                    message: format!("Restriction {id} is built in and cannot be deleted."),
                };
                (StatusCode::CONFLICT, body)
            }
            err @ (VaultError::UnknownProfile(_)
            | VaultError::Json(_)
            | VaultError::NoGeneratedPassword) => {
                let body = ApiErrorBody {
                    code: "BAD_REQUEST".to_string(),
                    message: err.to_string(),
                };
                (StatusCode::BAD_REQUEST, body)
            }
            VaultError::Reqwest(_) | VaultError::UrlParse(_) => {
                let body = ApiErrorBody {
                    code: "BAD_GATEWAY".to_string(),
                    message: "Upstream service is unavailable.".to_string(),
                };
                (StatusCode::BAD_GATEWAY, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
