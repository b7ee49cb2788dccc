//! Error types and response handling for the studio API.
//!
//! Every failure becomes a JSON body with a stable `type` string and, for
//! navigation failures, the route the client should fall back to.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::session::{LifecycleError, BROWSE_ROUTE};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// Direct catalog lookup for an id that is not curated.
    #[error("Quote '{quote_id}' not found")]
    QuoteNotFound { quote_id: String },

    /// The session was reset while the generation was running.
    #[error("Generation discarded because the session was reset")]
    GenerationDiscarded,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl ApiError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Lifecycle(err) => match err {
                LifecycleError::QuoteNotFound { .. } => StatusCode::NOT_FOUND,
                LifecycleError::NoActiveDesign => StatusCode::CONFLICT,
                LifecycleError::DesignNotFound { .. } => StatusCode::NOT_FOUND,
                LifecycleError::InvalidQuote(_) => StatusCode::BAD_REQUEST,
            },
            ApiError::QuoteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::GenerationDiscarded => StatusCode::CONFLICT,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error type string for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Lifecycle(err) => match err {
                LifecycleError::QuoteNotFound { .. } => "quote_not_found",
                LifecycleError::NoActiveDesign => "no_active_design",
                LifecycleError::DesignNotFound { .. } => "design_not_found",
                LifecycleError::InvalidQuote(_) => "invalid_quote",
            },
            ApiError::QuoteNotFound { .. } => "quote_not_found",
            ApiError::GenerationDiscarded => "generation_discarded",
            ApiError::InvalidRequest(_) => "invalid_request",
        }
    }

    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            ApiError::Lifecycle(err) => err.redirect_to(),
            ApiError::QuoteNotFound { .. } => Some(BROWSE_ROUTE),
            ApiError::GenerationDiscarded | ApiError::InvalidRequest(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut error = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });
        if let Some(route) = self.redirect() {
            error["redirect"] = route.into();
        }

        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error_type = self.error_type(), "{self}");
        } else {
            tracing::debug!(status = status.as_u16(), error_type = self.error_type(), "{self}");
        }

        (status, Json(serde_json::json!({ "error": error }))).into_response()
    }
}
