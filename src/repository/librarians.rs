//! Librarians repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::librarian::{CreateLibrarian, Librarian},
};

#[derive(Clone)]
pub struct LibrariansRepository {
    pool: Pool<Postgres>,
}

impl LibrariansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get librarian by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Librarian> {
        sqlx::query_as::<_, Librarian>(
            "SELECT id, name, password, email, phonenumber, address, role FROM librarians WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Get librarian by email (used for login and the duplicate pre-check)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Librarian>> {
        let librarian = sqlx::query_as::<_, Librarian>(
            "SELECT id, name, password, email, phonenumber, address, role FROM librarians WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(librarian)
    }

    /// Check if an email is already registered
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM librarians WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// List all librarians
    pub async fn list(&self) -> AppResult<Vec<Librarian>> {
        let librarians = sqlx::query_as::<_, Librarian>(
            "SELECT id, name, password, email, phonenumber, address, role FROM librarians ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(librarians)
    }

    /// Create a new librarian, returning the generated id
    pub async fn create(&self, librarian: &CreateLibrarian) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO librarians (name, password, email, phonenumber, address, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&librarian.name)
        .bind(&librarian.password)
        .bind(&librarian.email)
        .bind(&librarian.phonenumber)
        .bind(&librarian.address)
        .bind(&librarian.role)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Delete a librarian by ID
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM librarians WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
