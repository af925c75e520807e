//! Error type for `tally-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Input rejected on the add path; nothing was written.
  #[error("validation error: {0}")]
  Validation(#[from] tally_core::Error),

  /// The storage medium could not be opened, or a statement failed.
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
