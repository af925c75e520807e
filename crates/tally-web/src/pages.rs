//! HTML rendering for the ledger page.
//!
//! Hand-built markup; the page is self-contained (inline styles, no static
//! assets).

use std::collections::HashMap;

use tally_core::{credit::Credit, report::MonthlyView};

/// Render the ledger page: the full record table, the month-filtered total,
/// the per-month breakdown, and the add form.
pub fn index(
  credits: &[Credit],
  view: &MonthlyView,
  totals: &HashMap<String, f64>,
) -> String {
  let mut rows = String::new();
  for credit in credits {
    rows.push_str(&format!(
      "<tr><td>{}</td><td>{}</td><td class=\"num\">{:.2}</td>\
       <td>{}</td><td>{}</td>\
       <td><form method=\"post\" action=\"/delete/{}\">\
       <button>delete</button></form></td></tr>\n",
      credit.id,
      escape(&credit.name),
      credit.amount,
      escape(&credit.due_date),
      escape(&credit.comment),
      credit.id,
    ));
  }

  let mut months: Vec<(&str, f64)> =
    totals.iter().map(|(m, t)| (m.as_str(), *t)).collect();
  months.sort_by(|a, b| a.0.cmp(b.0));

  let mut breakdown = String::new();
  for (month, total) in months {
    breakdown.push_str(&format!(
      "<tr><td>{}</td><td class=\"num\">{total:.2}</td></tr>\n",
      escape(month),
    ));
  }

  format!(
    r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>tally</title>
<style>
  body {{ font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 48rem; }}
  table {{ border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }}
  th, td {{ border: 1px solid #ccc; padding: 0.35rem 0.6rem; text-align: left; }}
  td.num {{ text-align: right; }}
  form.add {{ display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }}
</style>
</head>
<body>
<h1>tally</h1>

<p>Total for {month}: <strong>{total:.2}</strong>
 &middot; <a href="/export">download xlsx</a></p>

<form class="add" method="post" action="/add">
  <input name="name" placeholder="name" required>
  <input name="amount" type="number" step="0.01" placeholder="amount" required>
  <input name="due_date" type="date" required>
  <input name="comment" placeholder="comment">
  <button>add</button>
</form>

<table>
<thead><tr><th>id</th><th>name</th><th>amount</th><th>due date</th><th>comment</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>

<h2>By month</h2>
<table>
<thead><tr><th>month</th><th>total</th></tr></thead>
<tbody>
{breakdown}</tbody>
</table>
</body>
</html>
"#,
    month = escape(&view.month),
    total = view.total,
  )
}

/// Minimal HTML escaping for text interpolated into the page.
fn escape(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}
