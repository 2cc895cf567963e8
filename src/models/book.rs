//! Book (catalog entry) model and its flat-file line encoding.
//!
//! The backing file format is one record per line, fields joined by commas:
//! `title,author,isbn`. Embedded commas in a field are not escaped and will
//! corrupt the record on the next decode; rejecting them would be input
//! validation the catalog deliberately does not do.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A catalog entry. Immutable once constructed; lookups are by ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Encode this book as a backing-file line: `title,author,isbn`
    pub fn encode(&self) -> String {
        format!("{},{},{}", self.title, self.author, self.isbn)
    }

    /// Decode a backing-file line into a book.
    ///
    /// Fewer than 3 comma-separated fields is a [`AppError::MalformedRecord`];
    /// extra fields beyond the third are ignored.
    pub fn decode(line: &str) -> AppResult<Self> {
        let mut fields = line.split(',');

        match (fields.next(), fields.next(), fields.next()) {
            (Some(title), Some(author), Some(isbn)) => Ok(Self::new(title, author, isbn)),
            _ => Err(AppError::MalformedRecord(format!(
                "expected 3 comma-separated fields, got {:?}",
                line
            ))),
        }
    }

    /// Exact-match report predicate: true when `query` equals the title,
    /// the author, or the ISBN. Never a substring match.
    pub fn matches(&self, query: &str) -> bool {
        self.title == query || self.author == query || self.isbn == query
    }
}
