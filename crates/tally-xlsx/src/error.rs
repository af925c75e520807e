//! Error type for `tally-xlsx`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A value could not be encoded into a worksheet cell.
  #[error("xlsx error: {0}")]
  Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
