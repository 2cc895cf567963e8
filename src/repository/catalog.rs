//! Catalog repository: an ordered, file-backed list of books.
//!
//! The whole catalog lives in memory; every mutation rewrites the backing
//! file from scratch (truncate + write, O(n) per call). There is no
//! uniqueness constraint on ISBN — duplicates are stored as-is and the
//! first match in insertion order wins on lookup.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::models::Book;

pub struct CatalogRepository {
    path: PathBuf,
    books: Vec<Book>,
}

impl CatalogRepository {
    /// Open the catalog, loading the backing file if it exists.
    ///
    /// A missing or unreadable file is not fatal: a warning is logged and
    /// the catalog starts empty. A line that fails to decode is fatal —
    /// silently skipping it would mask corruption of the backing file.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let books = match File::open(&path) {
            Ok(file) => Self::read_all(file)?,
            Err(e) => {
                tracing::warn!(
                    "Failed to load books from {}: {} (starting with an empty catalog)",
                    path.display(),
                    e
                );
                Vec::new()
            }
        };

        tracing::debug!("Loaded {} book(s) from {}", books.len(), path.display());

        Ok(Self { path, books })
    }

    fn read_all(file: File) -> AppResult<Vec<Book>> {
        let mut books = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let book = Book::decode(&line).map_err(|e| match e {
                AppError::MalformedRecord(msg) => {
                    AppError::MalformedRecord(format!("books file line {}: {}", line_no + 1, msg))
                }
                other => other,
            })?;
            books.push(book);
        }
        Ok(books)
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// First book in insertion order with the given ISBN
    pub fn get_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    /// Every book whose title, author, or ISBN exactly equals `query`
    pub fn find_matching(&self, query: &str) -> Vec<&Book> {
        self.books.iter().filter(|book| book.matches(query)).collect()
    }

    /// Total number of catalog entries. Borrow state is not subtracted.
    pub fn count(&self) -> usize {
        self.books.len()
    }

    /// All books in insertion order
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Append a book to the catalog and rewrite the backing file.
    ///
    /// On save failure the in-memory catalog keeps the new book and is left
    /// ahead of the on-disk state; the error is returned so the caller can
    /// decide what to do about the divergence.
    pub fn add(&mut self, book: Book) -> AppResult<()> {
        self.books.push(book);
        self.save()
    }

    /// Remove every book with the given ISBN and rewrite the backing file.
    /// Returns how many entries were removed (possibly zero).
    pub fn delete(&mut self, isbn: &str) -> AppResult<usize> {
        let before = self.books.len();
        self.books.retain(|book| book.isbn != isbn);
        let removed = before - self.books.len();
        self.save()?;
        Ok(removed)
    }

    /// Rewrite the whole backing file from the in-memory catalog
    fn save(&self) -> AppResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for book in &self.books {
            writeln!(writer, "{}", book.encode())?;
        }
        writer.flush()?;
        Ok(())
    }
}
