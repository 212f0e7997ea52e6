//! Librarian account management and login

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    config::ValidationConfig,
    error::{AppError, AppResult},
    models::librarian::{CreateLibrarian, Librarian},
    repository::Repository,
};

/// Phone numbers are digits only, 10 to 12 of them
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10,12}$").unwrap());

const MIN_PASSWORD_LEN: usize = 7;

#[derive(Clone)]
pub struct LibrariansService {
    repository: Repository,
    validation: ValidationConfig,
}

impl LibrariansService {
    pub fn new(repository: Repository, validation: ValidationConfig) -> Self {
        Self {
            repository,
            validation,
        }
    }

    /// Create a new librarian after running the field checks. The checks
    /// run in the same order the endpoints document them: email domain,
    /// duplicate email, password length, phone number.
    pub async fn create(&self, librarian: CreateLibrarian) -> AppResult<i32> {
        validate_email_domain(&librarian.email, &self.validation.email_domain)?;

        if self
            .repository
            .librarians
            .email_exists(&librarian.email)
            .await?
        {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        validate_credentials(&librarian)?;

        self.repository.librarians.create(&librarian).await
    }

    /// List all librarians
    pub async fn list(&self) -> AppResult<Vec<Librarian>> {
        self.repository.librarians.list().await
    }

    /// Get a librarian by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Librarian> {
        self.repository.librarians.get_by_id(id).await
    }

    /// Delete a librarian by ID
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        // Existence check first so a missing id answers 404
        self.repository
            .librarians
            .get_by_id(id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Librarian not found".to_string()),
                other => other,
            })?;

        self.repository.librarians.delete(id).await
    }

    /// Verify a librarian's credentials. Compares the submitted password
    /// against the stored one; both outcomes answer 401.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<()> {
        let librarian = self
            .repository
            .librarians
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("User not found".to_string()))?;

        if password != librarian.password {
            return Err(AppError::Authentication("Invalid password".to_string()));
        }

        Ok(())
    }
}

/// Email addresses must carry the configured domain suffix
fn validate_email_domain(email: &str, email_domain: &str) -> AppResult<()> {
    if !email.ends_with(email_domain) {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }

    Ok(())
}

/// Password and phone checks for a new librarian account. Password length
/// is counted in characters, not bytes.
fn validate_credentials(librarian: &CreateLibrarian) -> AppResult<()> {
    if librarian.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(
            "Password must be more than 6 characters".to_string(),
        ));
    }

    if !PHONE_RE.is_match(&librarian.phonenumber) {
        return Err(AppError::Validation(
            "Phone number must be between 10 to 12 digits".to_string(),
        ));
    }

    Ok(())
}
