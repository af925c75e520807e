//! Web surface for the tally ledger.
//!
//! Exposes an axum [`Router`] over any [`CreditStore`]: an HTML ledger page,
//! form endpoints for add and delete, a JSON month breakdown, and an XLSX
//! export. Everything here is thin I/O glue; the ledger rules live in
//! `tally-core`.

pub mod error;
pub mod handlers;
pub mod pages;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use tally_core::store::CreditStore;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: CreditStore> {
  pub store: Arc<S>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the ledger.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: CreditStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/",            get(handlers::index::<S>))
    .route("/add",         post(handlers::add::<S>))
    .route("/delete/{id}", post(handlers::delete::<S>))
    .route("/export",      get(handlers::export::<S>))
    .route("/months",      get(handlers::months::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use tally_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    AppState { store: Arc::new(store) }
  }

  async fn oneshot_raw(
    state:  AppState<SqliteStore>,
    method: &str,
    uri:    &str,
    body:   &str,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if method == "POST" {
      builder = builder
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  // ── Index ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn index_renders_the_empty_ledger() {
    let state = make_state().await;
    let resp = oneshot_raw(state, "GET", "/", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("<table"), "page has no table: {html}");
  }

  // ── Add ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn add_redirects_and_index_shows_the_record() {
    let state = make_state().await;

    let resp = oneshot_raw(
      state.clone(),
      "POST",
      "/add",
      "name=Rent&amount=1200.0&due_date=2024-03-05&comment=march",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = oneshot_raw(state, "GET", "/?month=2024-03", "").await;
    let html = body_string(resp).await;
    assert!(html.contains("Rent"));
    assert!(html.contains("1200.00"));
    assert!(html.contains("march"));
  }

  #[tokio::test]
  async fn add_with_empty_name_is_rejected() {
    let state = make_state().await;
    let resp = oneshot_raw(
      state,
      "POST",
      "/add",
      "name=&amount=10.0&due_date=2024-03-05",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── Delete ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_missing_id_still_redirects() {
    let state = make_state().await;
    let resp = oneshot_raw(state, "POST", "/delete/41", "").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  }

  // ── Export ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn export_is_an_xlsx_attachment() {
    let state = make_state().await;
    let resp = oneshot_raw(state, "GET", "/export", "").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let ct = resp
      .headers()
      .get(header::CONTENT_TYPE)
      .unwrap()
      .to_str()
      .unwrap();
    assert_eq!(ct, tally_xlsx::MEDIA_TYPE);

    let cd = resp
      .headers()
      .get(header::CONTENT_DISPOSITION)
      .unwrap()
      .to_str()
      .unwrap();
    assert!(cd.contains("credits.xlsx"), "Content-Disposition: {cd}");

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    assert_eq!(&bytes[..2], b"PK");
  }

  // ── Months ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn months_json_is_chronological() {
    let state = make_state().await;
    for (name, amount, due) in [
      ("Loan", "300.0", "2024-04-01"),
      ("Car", "500.0", "2024-03-01"),
      ("Rent", "1200.0", "2024-03-05"),
    ] {
      let body = format!("name={name}&amount={amount}&due_date={due}");
      let resp = oneshot_raw(state.clone(), "POST", "/add", &body).await;
      assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    let resp = oneshot_raw(state, "GET", "/months", "").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["month"], "2024-03");
    assert_eq!(entries[0]["total"], 1700.0);
    assert_eq!(entries[1]["month"], "2024-04");
    assert_eq!(entries[1]["total"], 300.0);
  }
}
