//! Error types for `tally-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("required field `{0}` is empty")]
  EmptyField(&'static str),

  #[error("amount is not a finite number: {0}")]
  NonFiniteAmount(f64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
