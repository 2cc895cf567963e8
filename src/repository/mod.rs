//! Repository layer for flat-file persistence

pub mod borrows;
pub mod catalog;

use crate::config::StorageConfig;
use crate::error::AppResult;

/// Main repository struct holding both file-backed stores.
///
/// Single-user, single-thread by contract: there is no locking and no
/// protection against concurrent access to the backing files.
pub struct Repository {
    pub catalog: catalog::CatalogRepository,
    pub borrows: borrows::BorrowRegistry,
}

impl Repository {
    /// Open both stores, loading whatever the backing files currently hold
    pub fn open(config: &StorageConfig) -> AppResult<Self> {
        Ok(Self {
            catalog: catalog::CatalogRepository::open(&config.books_file)?,
            borrows: borrows::BorrowRegistry::open(&config.borrowed_file)?,
        })
    }
}
