//! Repository layer for database operations

pub mod books;
pub mod categories;
pub mod librarians;
pub mod log_operations;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub librarians: librarians::LibrariansRepository,
    pub books: books::BooksRepository,
    pub categories: categories::CategoriesRepository,
    pub log_operations: log_operations::LogOperationsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            librarians: librarians::LibrariansRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            log_operations: log_operations::LogOperationsRepository::new(pool.clone()),
            pool,
        }
    }
}
