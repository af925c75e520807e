//! XLSX export for the tally ledger.
//!
//! Turns a snapshot of credit records into a complete, self-contained
//! spreadsheet document: one header row, then one row per record in
//! snapshot order.

pub mod error;

pub use error::{Error, Result};

use rust_xlsxwriter::Workbook;
use tally_core::credit::Credit;

/// Media type of the produced document.
pub const MEDIA_TYPE: &str =
  "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Suggested filename when the document is delivered as an attachment.
pub const FILENAME: &str = "credits.xlsx";

/// Column headers, in sheet order.
const HEADER: [&str; 5] = ["id", "name", "amount", "due_date", "comment"];

/// Serialise `credits` into XLSX bytes.
///
/// An empty snapshot produces a header-only sheet, not an error. The whole
/// document is built in memory; nothing is streamed.
pub fn serialize(credits: &[Credit]) -> Result<Vec<u8>> {
  let mut workbook = Workbook::new();
  let sheet = workbook.add_worksheet();
  sheet.set_name("credits")?;

  for (col, title) in HEADER.iter().enumerate() {
    sheet.write_string(0, col as u16, *title)?;
  }

  for (i, credit) in credits.iter().enumerate() {
    let row = (i + 1) as u32;
    sheet.write_number(row, 0, credit.id as f64)?;
    sheet.write_string(row, 1, &credit.name)?;
    sheet.write_number(row, 2, credit.amount)?;
    sheet.write_string(row, 3, &credit.due_date)?;
    sheet.write_string(row, 4, &credit.comment)?;
  }

  Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn credit(id: i64, name: &str, amount: f64, due_date: &str) -> Credit {
    Credit {
      id,
      name:     name.to_owned(),
      amount,
      due_date: due_date.to_owned(),
      comment:  String::new(),
    }
  }

  #[test]
  fn empty_snapshot_yields_a_complete_document() {
    let bytes = serialize(&[]).unwrap();
    // XLSX is a zip container; a header-only sheet is still a full document.
    assert_eq!(&bytes[..2], b"PK");
  }

  #[test]
  fn snapshot_with_records_serialises() {
    let mut with_comment = credit(3, "Gym", 40.0, "2024-05-10");
    with_comment.comment = "monthly fee".to_owned();

    let credits = vec![
      credit(1, "Car", 500.0, "2024-03-01"),
      credit(2, "Rent", 1200.0, "2024-03-05"),
      with_comment,
    ];
    let bytes = serialize(&credits).unwrap();
    assert_eq!(&bytes[..2], b"PK");
    // More rows, more bytes than the header-only document.
    assert!(bytes.len() > serialize(&[]).unwrap().len());
  }

  #[test]
  fn negative_amounts_are_representable() {
    let credits = vec![credit(1, "Refund", -120.5, "2024-02-01")];
    assert!(serialize(&credits).is_ok());
  }
}
