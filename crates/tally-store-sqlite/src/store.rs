//! [`SqliteStore`] — the SQLite implementation of [`CreditStore`].

use std::path::Path;

use tally_core::{
  credit::{Credit, NewCredit},
  store::CreditStore,
};

use crate::{Result, schema};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A tally ledger backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Statements
/// run one at a time on the connection's worker thread, so each store call
/// is atomic with respect to itself.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and bring its schema up to date.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.migrate().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.migrate().await?;
    Ok(store)
  }

  pub(crate) async fn migrate(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        schema::migrate(conn)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── CreditStore impl ────────────────────────────────────────────────────────

impl CreditStore for SqliteStore {
  type Error = crate::Error;

  async fn list_all(&self) -> Result<Vec<Credit>> {
    let credits = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, amount, due_date, comment
           FROM credits
           ORDER BY due_date",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Credit {
              id:       row.get(0)?,
              name:     row.get(1)?,
              amount:   row.get(2)?,
              due_date: row.get(3)?,
              comment:  row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(credits)
  }

  async fn add(&self, input: NewCredit) -> Result<Credit> {
    input.validate()?;

    let name     = input.name.clone();
    let due_date = input.due_date.clone();
    let comment  = input.comment.clone();
    let amount   = input.amount;

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO credits (name, amount, due_date, comment)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![name, amount, due_date, comment],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Credit {
      id,
      name:     input.name,
      amount:   input.amount,
      due_date: input.due_date,
      comment:  input.comment,
    })
  }

  async fn delete(&self, id: i64) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM credits WHERE id = ?1",
          rusqlite::params![id],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
