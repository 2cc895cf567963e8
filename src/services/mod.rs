//! Business logic services

pub mod catalog;
pub mod patron;

use crate::repository::Repository;

/// Container for all services
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub patrons: patron::PatronService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository),
            patrons: patron::PatronService::new(),
        }
    }
}
