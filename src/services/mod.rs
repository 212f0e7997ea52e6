//! Business logic services

pub mod books;
pub mod categories;
pub mod librarians;
pub mod log_operations;

use crate::{config::ValidationConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub librarians: librarians::LibrariansService,
    pub books: books::BooksService,
    pub categories: categories::CategoriesService,
    pub log_operations: log_operations::LogOperationsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, validation: ValidationConfig) -> Self {
        Self {
            librarians: librarians::LibrariansService::new(repository.clone(), validation),
            books: books::BooksService::new(repository.clone()),
            categories: categories::CategoriesService::new(repository.clone()),
            log_operations: log_operations::LogOperationsService::new(repository),
        }
    }
}
