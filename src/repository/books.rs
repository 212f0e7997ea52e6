//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a book by ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT isbn, title, author, category_id FROM books WHERE isbn = $1",
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT isbn, title, author, category_id FROM books ORDER BY isbn",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// List all books in a category
    pub async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT isbn, title, author, category_id FROM books WHERE category_id = $1 ORDER BY isbn",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Create a new book. An unknown category_id is rejected by the
    /// foreign-key constraint, not checked here.
    pub async fn create(&self, book: &CreateBook) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO books (isbn, title, author, category_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.category_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Overwrite title and author of an existing book
    pub async fn update(&self, isbn: &str, book: &UpdateBook) -> AppResult<()> {
        sqlx::query("UPDATE books SET title = $1, author = $2 WHERE isbn = $3")
            .bind(&book.title)
            .bind(&book.author)
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete a book by ISBN
    pub async fn delete(&self, isbn: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
