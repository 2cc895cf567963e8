//! Catalog management service (the administrator surface)

use crate::{error::AppResult, models::Book, repository::Repository};

pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book to the catalog. No duplicate check: the same ISBN may be
    /// added any number of times.
    pub fn add_book(&mut self, book: Book) -> AppResult<()> {
        tracing::info!("Adding book {} ({})", book.title, book.isbn);
        self.repository.catalog.add(book)
    }

    /// Delete every book with the given ISBN; returns how many were removed
    pub fn delete_book(&mut self, isbn: &str) -> AppResult<usize> {
        let removed = self.repository.catalog.delete(isbn)?;
        tracing::info!("Deleted {} book(s) with ISBN {}", removed, isbn);
        Ok(removed)
    }

    /// Record that a book is borrowed. Upserts: recording the same ISBN
    /// again replaces the previous borrower.
    pub fn record_borrow(&mut self, isbn: &str, borrower: &str) -> AppResult<()> {
        tracing::info!("Recording borrow of {} by {}", isbn, borrower);
        self.repository.borrows.record(isbn, borrower)
    }

    /// Look up a book by ISBN. Returns the first match in insertion order,
    /// or `None` — "not found" is a sentinel here, never an error.
    pub fn inquire(&self, isbn: &str) -> Option<Book> {
        self.repository.catalog.get_by_isbn(isbn).cloned()
    }

    /// Total number of catalog entries.
    ///
    /// Despite the name, borrow state is not subtracted: this is the size
    /// of the catalog, not the number of un-borrowed books.
    pub fn available_count(&self) -> usize {
        self.repository.catalog.count()
    }

    /// Exact-match report: every book whose title, author, or ISBN equals
    /// the query string
    pub fn report(&self, query: &str) -> Vec<Book> {
        self.repository
            .catalog
            .find_matching(query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Borrower currently recorded for an ISBN, if any
    pub fn borrower_of(&self, isbn: &str) -> Option<String> {
        self.repository.borrows.borrower_of(isbn).map(str::to_string)
    }
}
