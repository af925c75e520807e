//! The `CreditStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `tally-store-sqlite`).
//! Higher layers (`tally-web`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::credit::{Credit, NewCredit};

/// Abstraction over a tally ledger backend.
///
/// Records are immutable: the only writes are whole-record insertion and
/// deletion, and each call is atomic with respect to itself. No isolation is
/// promised across separate calls.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CreditStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every record, ascending by `due_date`.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Credit>, Self::Error>> + Send + '_;

  /// Validate and insert a record, returning it with its store-assigned id.
  fn add(
    &self,
    input: NewCredit,
  ) -> impl Future<Output = Result<Credit, Self::Error>> + Send + '_;

  /// Remove the record with this id. Deleting a missing id is a no-op.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
