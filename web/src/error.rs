//! Error types for web handlers.
//!
//! This module bridges context construction failures and HTTP responses,
//! implementing Axum's `IntoResponse` trait.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use backoffice_core::ContextError;
use serde::Serialize;
use std::fmt;

/// Application error type for web handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler(request: Request) -> Result<Json<ControllerContext>, AppError> {
///     let controller = builder.build(&request_parameters(request.uri(), request.extensions())).await?;
///     Ok(Json(controller))
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code (for client error handling)
    code: String,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: String) -> Self {
        Self {
            status,
            message,
            code,
            source: None,
        }
    }

    /// Create a new error with a source error.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The legacy context layer did not run for this route.
    #[must_use]
    pub fn context_missing() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "No legacy controller context for this request".to_string(),
            "CONTEXT_MISSING".to_string(),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Error code (for client error handling).
    code: String,
    /// Human-readable error message.
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    message = %self.message,
                    error = %source,
                    "Internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    message = %self.message,
                    "Internal server error"
                );
            }
        }

        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

/// Context construction failures abort the request.
impl From<ContextError> for AppError {
    fn from(err: ContextError) -> Self {
        let code = match &err {
            ContextError::TabRegistry { .. } => "TAB_REGISTRY_UNAVAILABLE",
            ContextError::Translation(_) => "TRANSLATION_FAILED",
        };

        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "The back office context could not be built".to_string(),
            code.to_string(),
        )
        .with_source(err.into())
    }
}
