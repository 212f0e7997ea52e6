//! Librarian model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Librarian account from the database.
///
/// The password is stored and returned as plaintext; anything beyond the
/// plaintext comparison done at login is out of scope for this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Librarian {
    pub id: i32,
    pub name: String,
    pub password: String,
    pub email: String,
    pub phonenumber: String,
    pub address: String,
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

/// Create librarian request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLibrarian {
    pub name: String,
    pub password: String,
    pub email: String,
    pub phonenumber: String,
    pub address: String,
    #[serde(default = "default_role")]
    pub role: String,
}

/// Shared librarian field set, embedded by value into payloads that carry
/// the same shape plus extras (see [`User`]).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LibrarianBase {
    pub name: String,
    pub password: String,
    pub email: String,
    pub phonenumber: String,
    pub address: String,
    #[serde(default = "default_role")]
    pub role: String,
}

/// Reader account payload: the librarian field set plus registration state.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(flatten)]
    pub base: LibrarianBase,
    pub status: String,
    pub date_of_reg: NaiveDate,
}
