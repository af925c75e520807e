//! SQL schema and migrations for the tally SQLite store.
//!
//! The live schema version is tracked in `PRAGMA user_version` and checked
//! on every open. Version history:
//!
//! - 1: `credits` table (id, name, amount, due_date) and due-date index
//! - 2: `comment` column, default empty

/// Baseline DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA_V1: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS credits (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL,
    amount   REAL NOT NULL,
    due_date TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS credits_due_date_idx ON credits(due_date);
";

/// The version a fully migrated database reports.
pub const SCHEMA_VERSION: i64 = 2;

/// Step a database forward to [`SCHEMA_VERSION`]. Safe to run on every open:
/// each step checks the actual state of the database rather than assuming
/// it, so re-running against an upgraded file is a no-op.
///
/// Databases created before versioning report `user_version = 0` but may
/// already carry the `credits` table; the column probe below covers both the
/// fresh and the legacy shape.
pub fn migrate(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
  let version: i64 =
    conn.pragma_query_value(None, "user_version", |r| r.get(0))?;

  if version < 1 {
    conn.execute_batch(SCHEMA_V1)?;
  }

  if version < 2 && !column_exists(conn, "credits", "comment")? {
    conn.execute_batch(
      "ALTER TABLE credits ADD COLUMN comment TEXT NOT NULL DEFAULT ''",
    )?;
  }

  if version < SCHEMA_VERSION {
    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
  }

  Ok(())
}

fn column_exists(
  conn: &rusqlite::Connection,
  table: &str,
  column: &str,
) -> rusqlite::Result<bool> {
  let n: i64 = conn.query_row(
    "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
    rusqlite::params![table, column],
    |r| r.get(0),
  )?;
  Ok(n > 0)
}
