//! Error responses.
//!
//! # Responsibilities
//! - Map routing errors to HTTP status codes
//! - Render errors as `{"error": "..."}` JSON bodies
//!
//! # Design Decisions
//! - `NoMatch` and `UnknownRouteName` are 404, caller input errors are 400
//! - Lookups that indicate a caller defect are logged at error level

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::routing::RouteError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Route(RouteError::NoMatch { .. })
            | ApiError::Route(RouteError::UnknownRouteName { .. }) => StatusCode::NOT_FOUND,
            ApiError::Route(RouteError::UnregisteredComponent { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Route(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Route(
                RouteError::UnknownRouteName { .. } | RouteError::MissingParameter { .. },
            ) => tracing::error!(error = %self, "Reverse lookup failed"),
            ApiError::Route(RouteError::UnregisteredComponent { .. }) => {
                tracing::error!(error = %self, "Route table and registry disagree")
            }
            _ => tracing::debug!(error = %self, "Request rejected"),
        }

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (RouteError::NoMatch { path: "/x".into() }, StatusCode::NOT_FOUND),
            (
                RouteError::UnknownRouteName { name: "Nope".into() },
                StatusCode::NOT_FOUND,
            ),
            (
                RouteError::MissingParameter {
                    route: "Share".into(),
                    param: "ident".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                RouteError::MalformedPath { path: "x".into() },
                StatusCode::BAD_REQUEST,
            ),
            (
                RouteError::UnregisteredComponent {
                    route: "Main".into(),
                    component: "Dashboard".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
        assert_eq!(
            ApiError::BadRequest("missing name".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
