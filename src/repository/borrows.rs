//! Borrow registry: a file-backed mapping from ISBN to borrower name.
//!
//! Keys are unique and an upsert is last-write-wins. Nothing ties a
//! registry key to a catalog entry: a borrow record may outlive (or
//! predate) the book it refers to.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::models::BorrowRecord;

pub struct BorrowRegistry {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl BorrowRegistry {
    /// Open the registry, loading the backing file if it exists.
    ///
    /// Same load contract as the catalog: a missing or unreadable file
    /// logs a warning and yields an empty registry; a malformed line is
    /// a typed error.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match File::open(&path) {
            Ok(file) => Self::read_all(file)?,
            Err(e) => {
                tracing::warn!(
                    "Failed to load borrowed books from {}: {} (starting with an empty registry)",
                    path.display(),
                    e
                );
                HashMap::new()
            }
        };

        tracing::debug!(
            "Loaded {} borrow record(s) from {}",
            entries.len(),
            path.display()
        );

        Ok(Self { path, entries })
    }

    fn read_all(file: File) -> AppResult<HashMap<String, String>> {
        let mut entries = HashMap::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let record = BorrowRecord::decode(&line).map_err(|e| match e {
                AppError::MalformedRecord(msg) => AppError::MalformedRecord(format!(
                    "borrowed file line {}: {}",
                    line_no + 1,
                    msg
                )),
                other => other,
            })?;
            entries.insert(record.isbn, record.borrower);
        }
        Ok(entries)
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Borrower currently recorded for an ISBN, if any
    pub fn borrower_of(&self, isbn: &str) -> Option<&str> {
        self.entries.get(isbn).map(String::as_str)
    }

    /// Number of borrow records
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Upsert a borrow record (last write wins) and rewrite the backing file
    pub fn record(&mut self, isbn: impl Into<String>, borrower: impl Into<String>) -> AppResult<()> {
        self.entries.insert(isbn.into(), borrower.into());
        self.save()
    }

    /// Rewrite the whole backing file from the in-memory mapping.
    /// Line order follows map iteration order and is not stable.
    fn save(&self) -> AppResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for (isbn, borrower) in &self.entries {
            writeln!(
                writer,
                "{}",
                BorrowRecord::new(isbn.clone(), borrower.clone()).encode()
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}
