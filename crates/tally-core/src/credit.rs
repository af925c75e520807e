//! Credit — the fundamental unit of the tally ledger.
//!
//! A credit is a scheduled debt obligation: a label, an amount, and the date
//! it falls due. Records are immutable once written; the only mutations the
//! ledger knows are whole-record insertion and deletion.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Leading characters of a due date that form the `YYYY-MM` month key.
const MONTH_KEY_LEN: usize = 7;

// ─── Credit ──────────────────────────────────────────────────────────────────

/// A persisted ledger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
  /// Store-assigned; monotonically increasing, never reused, never mutated.
  pub id:       i64,
  pub name:     String,
  pub amount:   f64,
  /// `YYYY-MM-DD`; doubles as the sort key and the source of the month key.
  pub due_date: String,
  /// Free text; empty when the caller supplied none.
  pub comment:  String,
}

impl Credit {
  /// The `YYYY-MM` grouping key: the first 7 characters of the due date.
  ///
  /// No date parsing happens here. A malformed due date contributes whatever
  /// its first 7 characters are; one shorter than that (or one whose seventh
  /// byte is not a char boundary) is used whole.
  pub fn month_key(&self) -> &str {
    self.due_date.get(..MONTH_KEY_LEN).unwrap_or(&self.due_date)
  }
}

// ─── NewCredit ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::CreditStore::add`].
/// `id` is always assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCredit {
  pub name:     String,
  pub amount:   f64,
  pub due_date: String,
  #[serde(default)]
  pub comment:  String,
}

impl NewCredit {
  /// Convenience constructor with an empty comment.
  pub fn new(
    name: impl Into<String>,
    amount: f64,
    due_date: impl Into<String>,
  ) -> Self {
    Self {
      name:     name.into(),
      amount,
      due_date: due_date.into(),
      comment:  String::new(),
    }
  }

  /// Shape validation applied on the add path: required fields non-empty,
  /// amount a finite number of either sign.
  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::EmptyField("name"));
    }
    if self.due_date.trim().is_empty() {
      return Err(Error::EmptyField("due_date"));
    }
    if !self.amount.is_finite() {
      return Err(Error::NonFiniteAmount(self.amount));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn credit_due(due_date: &str) -> Credit {
    Credit {
      id:       1,
      name:     "Rent".into(),
      amount:   1200.0,
      due_date: due_date.into(),
      comment:  String::new(),
    }
  }

  #[test]
  fn month_key_is_the_date_prefix() {
    assert_eq!(credit_due("2024-03-05").month_key(), "2024-03");
  }

  #[test]
  fn month_key_of_short_date_is_the_whole_string() {
    assert_eq!(credit_due("soon").month_key(), "soon");
  }

  #[test]
  fn month_key_never_splits_a_char() {
    // Seventh byte lands inside a multi-byte char; fall back to the whole
    // string instead of panicking.
    assert_eq!(credit_due("2024-0月05").month_key(), "2024-0月05");
  }

  #[test]
  fn validate_rejects_blank_required_fields() {
    let mut input = NewCredit::new("  ", 10.0, "2024-01-01");
    assert!(matches!(input.validate(), Err(Error::EmptyField("name"))));

    input = NewCredit::new("Car", 10.0, "");
    assert!(matches!(input.validate(), Err(Error::EmptyField("due_date"))));
  }

  #[test]
  fn validate_rejects_non_finite_amounts() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
      let input = NewCredit::new("Car", bad, "2024-01-01");
      assert!(matches!(input.validate(), Err(Error::NonFiniteAmount(_))));
    }
  }

  #[test]
  fn validate_accepts_negative_and_zero_amounts() {
    assert!(NewCredit::new("Refund", -120.5, "2024-01-01").validate().is_ok());
    assert!(NewCredit::new("Placeholder", 0.0, "2024-01-01").validate().is_ok());
  }
}
