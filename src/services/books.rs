//! Book inventory management

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book to the inventory
    pub async fn create(&self, book: CreateBook) -> AppResult<()> {
        self.repository.books.create(&book).await
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get a book by ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.repository.books.get_by_isbn(isbn).await
    }

    /// List books in a category. An empty result answers 404, whether the
    /// category is unknown or merely has no books.
    pub async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Book>> {
        let books = self.repository.books.list_by_category(category_id).await?;
        if books.is_empty() {
            return Err(AppError::NotFound(
                "No books found for this category".to_string(),
            ));
        }
        Ok(books)
    }

    /// Update title and author of an existing book
    pub async fn update(&self, isbn: &str, book: UpdateBook) -> AppResult<()> {
        self.repository.books.get_by_isbn(isbn).await?;
        self.repository.books.update(isbn, &book).await
    }

    /// Delete a book by ISBN
    pub async fn delete(&self, isbn: &str) -> AppResult<()> {
        self.repository.books.get_by_isbn(isbn).await?;
        self.repository.books.delete(isbn).await
    }
}
