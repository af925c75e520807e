//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Form input rejected before any write.
  #[error("invalid input: {0}")]
  Invalid(#[from] tally_core::Error),

  #[error("export error: {0}")]
  Export(#[from] tally_xlsx::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Invalid(e) => {
        (StatusCode::BAD_REQUEST, e.to_string()).into_response()
      }
      Error::Export(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
      Error::Store(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
    }
  }
}
