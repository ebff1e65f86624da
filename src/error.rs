use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("consist of bad word '{0}' isn't allowed")]
    BadKeyword(String),

    #[error("failed to make a {operation} request: {message}")]
    BuildRequest {
        operation: &'static str,
        message: String,
    },

    #[error("failed to make a http call to {operation}: {message}")]
    Http {
        operation: &'static str,
        message: String,
    },

    #[error("failed read {operation} response: {message}")]
    ReadResponse {
        operation: &'static str,
        message: String,
    },

    #[error("failed to decode {operation} response: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    #[error("failed seeding data with id {id}: {source}")]
    Seed {
        id: i64,
        #[source]
        source: Box<RosterError>,
    },
}

pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Every failure reaching the HTTP layer is reported as a server error,
    /// including keyword validation.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

// Axum IntoResponse implementation (feature-gated)
#[cfg(feature = "axum-support")]
use axum::response::{IntoResponse, Json, Response};
#[cfg(feature = "axum-support")]
use serde::Serialize;

#[cfg(feature = "axum-support")]
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(feature = "axum-support")]
impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
