//! The aggregation engine: pure functions over a ledger snapshot.
//!
//! Nothing here touches storage, and only [`current_month_key`] reads the
//! clock, to supply the default filter month.

use std::collections::HashMap;

use chrono::Local;

use crate::credit::Credit;

// ─── Month view ──────────────────────────────────────────────────────────────

/// One month of the ledger: the matching records, in input order, and their
/// arithmetic total.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyView {
  pub month:   String,
  pub credits: Vec<Credit>,
  pub total:   f64,
}

/// Select the records whose `due_date` starts with `month` and sum their
/// amounts. When `month` is `None` the current calendar month is used.
///
/// An empty selection yields `total == 0.0`, not an error.
pub fn filter_by_month(credits: &[Credit], month: Option<&str>) -> MonthlyView {
  let month = month.map(str::to_owned).unwrap_or_else(current_month_key);

  let selected: Vec<Credit> = credits
    .iter()
    .filter(|c| c.due_date.starts_with(&month))
    .cloned()
    .collect();
  let total = selected.iter().map(|c| c.amount).sum();

  MonthlyView { month, credits: selected, total }
}

// ─── Per-month totals ────────────────────────────────────────────────────────

/// Accumulate every record's amount into its month-key bucket, over the
/// entire unfiltered snapshot.
///
/// Keys are exactly the months with at least one record; months with no
/// activity are absent rather than zero. Iteration order is unspecified;
/// consumers that want chronology sort the keys themselves.
pub fn monthly_totals(credits: &[Credit]) -> HashMap<String, f64> {
  let mut totals = HashMap::new();
  for credit in credits {
    *totals.entry(credit.month_key().to_owned()).or_insert(0.0) +=
      credit.amount;
  }
  totals
}

/// The wall-clock `YYYY-MM` key for the current local month.
pub fn current_month_key() -> String {
  Local::now().format("%Y-%m").to_string()
}
