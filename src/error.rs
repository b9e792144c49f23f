//! Application error taxonomy and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. The [`IntoResponse`] impl is the
//! single place where domain outcomes become status codes and the
//! `{status: "ERROR", error}` envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::api::dto::response::ErrorResponse;

/// Failures raised by the storage backend that are not domain outcomes.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage query failed: {0}")]
    Query(String),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage operation timed out: {0}")]
    Timeout(String),

    #[error("unsupported storage configuration: {0}")]
    Unsupported(String),
}

/// Errors produced while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing alias")]
    MissingAlias,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("invalid alias: {0}")]
    InvalidAlias(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("alias already exists: {0}")]
    AliasExists(String),

    #[error("failed to generate unique alias after {attempts} attempts")]
    AliasGenerationExhausted { attempts: usize },

    #[error("url not found for alias {0}")]
    UrlNotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("no route for {0}")]
    RouteNotFound(String),

    #[error("method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("handler panicked: {0}")]
    Panic(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAlias
            | Self::InvalidRequest(_)
            | Self::Validation(_)
            | Self::InvalidAlias(_)
            | Self::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            Self::AliasExists(_) => StatusCode::CONFLICT,
            Self::UrlNotFound(_) | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::AliasGenerationExhausted { .. } | Self::Storage(_) | Self::Panic(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the client.
    ///
    /// Storage failures collapse to a generic text so backend details never
    /// leave the process.
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingAlias => "missing alias".to_string(),
            Self::InvalidRequest(_) => "invalid request".to_string(),
            Self::Validation(message) => message.clone(),
            Self::InvalidAlias(_) => "invalid alias".to_string(),
            Self::InvalidUrl(_) => "invalid URL format".to_string(),
            Self::AliasExists(_) => "alias already exist".to_string(),
            Self::AliasGenerationExhausted { .. } => "failed to generate unique alias".to_string(),
            Self::UrlNotFound(_) => "url not found".to_string(),
            Self::Storage(_) | Self::Panic(_) => "internal error".to_string(),
            Self::RouteNotFound(_) => "not found".to_string(),
            Self::MethodNotAllowed(_) => "method not allowed".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::info!(error = %self, status = status.as_u16(), "request rejected");
        }

        (status, Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}

/// Flattens validator output into `field <name> is required; ...`.
///
/// Fields are sorted so the message is stable across runs.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.errors().iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let mut messages = Vec::new();
        for (field, kind) in fields {
            let ValidationErrorsKind::Field(field_errors) = kind else {
                messages.push(format!("field {field} is not valid"));
                continue;
            };

            for err in field_errors {
                let message = match (&err.message, &*err.code) {
                    (Some(message), _) => message.to_string(),
                    (None, "required") => format!("field {field} is required"),
                    (None, "url") => format!("field {field} is not valid Url"),
                    (None, _) => format!("field {field} is not valid"),
                };
                messages.push(message);
            }
        }

        AppError::Validation(messages.join("; "))
    }
}
