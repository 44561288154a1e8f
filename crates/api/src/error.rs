//! Error types for luach-api and their HTTP mapping.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use luach_calendar::CalendarError;
use luach_parasha::ParashaError;
use serde::Serialize;
use thiserror::Error;

/// Failure of a request, rendered as `{"error": "<kind>"}`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Malformed or non-existent date in the request.
    #[error("invalid date: {reason}")]
    InvalidDate {
        /// Description of what was wrong with the input.
        reason: String,
    },

    /// The date is valid but outside what the calendar can answer for.
    #[error("unsupported date range: {reason}")]
    UnsupportedDateRange {
        /// Description of the range that was exceeded.
        reason: String,
    },
}

impl ApiError {
    /// Returns the machine-readable kind sent in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidDate { .. } => "InvalidDate",
            ApiError::UnsupportedDateRange { .. } => "UnsupportedDateRange",
        }
    }

    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedDateRange { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CalendarError> for ApiError {
    fn from(e: CalendarError) -> Self {
        let reason = e.to_string();
        match e {
            CalendarError::UnsupportedRange { .. } => ApiError::UnsupportedDateRange { reason },
            _ => ApiError::InvalidDate { reason },
        }
    }
}

impl From<ParashaError> for ApiError {
    fn from(e: ParashaError) -> Self {
        match e {
            ParashaError::Calendar(inner) => inner.into(),
            other => ApiError::UnsupportedDateRange {
                reason: other.to_string(),
            },
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::InvalidDate {
            reason: e.body_text(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(kind = self.kind(), "{self}");
        let body = ErrorBody { error: self.kind() };
        (self.status(), Json(body)).into_response()
    }
}
