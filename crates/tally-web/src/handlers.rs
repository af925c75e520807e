//! Route handlers: thin glue between the router and the ledger components.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Ledger page; optional `?month=YYYY-MM` filter |
//! | `POST` | `/add` | Urlencoded [`AddForm`]; 303 back to `/` |
//! | `POST` | `/delete/{id}` | Missing ids are a no-op; 303 back to `/` |
//! | `GET`  | `/export` | Full ledger as an XLSX attachment |
//! | `GET`  | `/months` | Per-month totals as JSON, chronological |

use axum::{
  Form, Json,
  body::Body,
  extract::{Path, Query, State},
  http::{StatusCode, header},
  response::{Html, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tally_core::{credit::NewCredit, report, store::CreditStore};

use crate::{AppState, error::Error, pages};

// ─── Index ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct IndexParams {
  /// `YYYY-MM` filter; defaults to the current month.
  pub month: Option<String>,
}

/// `GET /[?month=YYYY-MM]` — the ledger page.
pub async fn index<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<IndexParams>,
) -> Result<Html<String>, Error>
where
  S: CreditStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let credits = state
    .store
    .list_all()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let view = report::filter_by_month(&credits, params.month.as_deref());
  let totals = report::monthly_totals(&credits);

  Ok(Html(pages::index(&credits, &view, &totals)))
}

// ─── Add ─────────────────────────────────────────────────────────────────────

/// Urlencoded body accepted by `POST /add`.
#[derive(Debug, Deserialize)]
pub struct AddForm {
  pub name:     String,
  pub amount:   f64,
  pub due_date: String,
  #[serde(default)]
  pub comment:  String,
}

/// `POST /add` — insert a record, then redirect back to the ledger.
pub async fn add<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<AddForm>,
) -> Result<Redirect, Error>
where
  S: CreditStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = NewCredit {
    name:     form.name,
    amount:   form.amount,
    due_date: form.due_date,
    comment:  form.comment,
  };
  // Validate here so shape errors map to 400 rather than an opaque 500.
  input.validate()?;

  state
    .store
    .add(input)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(Redirect::to("/"))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `POST /delete/{id}` — remove a record, then redirect back to the ledger.
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Redirect, Error>
where
  S: CreditStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  state
    .store
    .delete(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(Redirect::to("/"))
}

// ─── Export ──────────────────────────────────────────────────────────────────

/// `GET /export` — the full ledger as an XLSX attachment.
pub async fn export<S>(
  State(state): State<AppState<S>>,
) -> Result<Response, Error>
where
  S: CreditStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let credits = state
    .store
    .list_all()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let bytes = tally_xlsx::serialize(&credits)?;

  Ok(
    Response::builder()
      .status(StatusCode::OK)
      .header(header::CONTENT_TYPE, tally_xlsx::MEDIA_TYPE)
      .header(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", tally_xlsx::FILENAME),
      )
      .header(header::CONTENT_LENGTH, bytes.len())
      .body(Body::from(bytes))
      .unwrap(),
  )
}

// ─── Months ──────────────────────────────────────────────────────────────────

/// One entry of the per-month breakdown.
#[derive(Debug, Serialize)]
pub struct MonthTotal {
  pub month: String,
  pub total: f64,
}

/// `GET /months` — per-month totals, sorted chronologically.
pub async fn months<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<MonthTotal>>, Error>
where
  S: CreditStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let credits = state
    .store
    .list_all()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let mut entries: Vec<MonthTotal> = report::monthly_totals(&credits)
    .into_iter()
    .map(|(month, total)| MonthTotal { month, total })
    .collect();
  entries.sort_by(|a, b| a.month.cmp(&b.month));

  Ok(Json(entries))
}
