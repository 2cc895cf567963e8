//! Patron-facing operations (the user menu surface).
//!
//! Thin pass-throughs over the catalog service, mirroring the role split of
//! the console menus. The patron side holds no state of its own; mutating
//! operations borrow the catalog service they act on.

use crate::{error::AppResult, models::Book, services::catalog::CatalogService};

#[derive(Default)]
pub struct PatronService;

impl PatronService {
    pub fn new() -> Self {
        Self
    }

    /// Look up a book by ISBN (delegates to the catalog)
    pub fn inquire(&self, catalog: &CatalogService, isbn: &str) -> Option<Book> {
        catalog.inquire(isbn)
    }

    /// Request a new book. Despite the name there is no approval workflow:
    /// the book goes straight into the catalog.
    pub fn request_new_book(
        &self,
        catalog: &mut CatalogService,
        title: &str,
        author: &str,
        isbn: &str,
    ) -> AppResult<()> {
        catalog.add_book(Book::new(title, author, isbn))
    }

    /// Format a complaint for the output sink. Complaints are not stored
    /// anywhere; printing the returned line is all that happens to them.
    pub fn complain(&self, complaint: &str) -> String {
        tracing::info!("Complaint received: {}", complaint);
        format!("User complaint: {}", complaint)
    }
}
