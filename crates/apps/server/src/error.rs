use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use rubik::{SolveError, StateError};
use serde::Serialize;

/// Errors reported to HTTP clients as `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The cube was malformed, refused, or could not be solved
    Cube(rubik::Error),
    /// The blocking solve task did not finish
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Cube(rubik::Error::Solve(SolveError::Unavailable(_))) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Cube(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Cube(e) => e.to_string(),
            ApiError::Internal(e) => e.clone(),
        }
    }
}

impl From<rubik::Error> for ApiError {
    fn from(err: rubik::Error) -> Self {
        ApiError::Cube(err)
    }
}

impl From<StateError> for ApiError {
    fn from(err: StateError) -> Self {
        ApiError::Cube(err.into())
    }
}

impl From<SolveError> for ApiError {
    fn from(err: SolveError) -> Self {
        ApiError::Cube(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
