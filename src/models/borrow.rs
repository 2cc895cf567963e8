//! Borrow record model: one `isbn,borrower` line per registry entry.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A single borrowed-book record. The registry keys these by ISBN, so a
/// record may reference an ISBN that is absent from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub isbn: String,
    pub borrower: String,
}

impl BorrowRecord {
    pub fn new(isbn: impl Into<String>, borrower: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            borrower: borrower.into(),
        }
    }

    /// Encode this record as a backing-file line: `isbn,borrower`
    pub fn encode(&self) -> String {
        format!("{},{}", self.isbn, self.borrower)
    }

    /// Decode a backing-file line. Fewer than 2 fields is a
    /// [`AppError::MalformedRecord`]; extra fields are ignored.
    pub fn decode(line: &str) -> AppResult<Self> {
        let mut fields = line.split(',');

        match (fields.next(), fields.next()) {
            (Some(isbn), Some(borrower)) => Ok(Self::new(isbn, borrower)),
            _ => Err(AppError::MalformedRecord(format!(
                "expected 2 comma-separated fields, got {:?}",
                line
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let record = BorrowRecord::new("111", "Alice");
        assert_eq!(BorrowRecord::decode(&record.encode()).unwrap(), record);
    }

    #[test]
    fn test_decode_missing_borrower() {
        assert!(matches!(
            BorrowRecord::decode("111"),
            Err(AppError::MalformedRecord(_))
        ));
    }
}
