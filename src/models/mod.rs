//! Data models for Libram

pub mod book;
pub mod borrow;

// Re-export commonly used types
pub use book::Book;
pub use borrow::BorrowRecord;
