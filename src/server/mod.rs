//! HTTP Server Module
//!
//! Exposes the corpus and both query engines over JSON endpoints.
//!
//! ## Endpoints
//! - `GET /` serves the configured HTML page.
//! - `POST /api/update-terms` replaces the recognized-terms list.
//! - `POST /api/upload-doc` accepts multipart files under the `documents` field.
//! - `POST /api/clear-docs` empties the corpus.
//! - `POST /api/search` runs a boolean query.
//! - `POST /api/rank` runs a vector-space query.
//! - `GET /api/stats` reports corpus statistics.
//!
//! Failures are plain-text bodies; see `ErrorKind` for the status mapping.

pub mod handlers;
pub mod routes;
pub mod types;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crate::core::error::{Error, ErrorKind};

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::NoDocuments
            | ErrorKind::NoTerms
            | ErrorKind::InvalidInput
            | ErrorKind::Parse => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Io | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        (status, self.context).into_response()
    }
}

pub use routes::router;
