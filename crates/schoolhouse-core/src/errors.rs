//! Application error type.
//!
//! Every layer returns [`AppError`]. The [`ErrorKind`] decides the HTTP status
//! and how much of the underlying error the client gets to see: validation,
//! not-found and unauthorized errors carry their message, malformed requests
//! and server-side failures are answered with a generic body and logged.

use std::fmt;

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input failed declared constraints.
    Validation,
    /// No record matches the requested identifier.
    NotFound,
    /// Missing or invalid credentials on a protected route.
    Unauthorized,
    /// The request body or query string could not be decoded.
    BadRequest,
    /// The store failed for a reason other than "no row".
    Persistence,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation | ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Persistence | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Persistence => "persistence",
            ErrorKind::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Field-level validation failures, keyed by field name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
    pub details: Option<Value>,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
            details: None,
        }
    }

    /// Builds a validation error keeping the per-field failures for the response body.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            kind: ErrorKind::Validation,
            error: anyhow::anyhow!("{}", format_errors(&errors)),
            details: serde_json::to_value(errors.field_errors()).ok(),
        }
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, anyhow::anyhow!(message.into()))
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::BadRequest, err)
    }

    pub fn persistence<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Persistence, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }

    pub fn is_persistence(&self) -> bool {
        self.kind == ErrorKind::Persistence
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.kind {
            ErrorKind::Validation | ErrorKind::NotFound | ErrorKind::Unauthorized => {
                ErrorResponse {
                    error: self.error.to_string(),
                    details: self.details,
                }
            }
            // the decode error was already logged where it happened
            ErrorKind::BadRequest => ErrorResponse {
                error: "Bad request".to_string(),
                details: None,
            },
            ErrorKind::Persistence | ErrorKind::Internal => {
                error!(error.kind = %self.kind, error = ?self.error, "Request failed");
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.join(", ")
}
