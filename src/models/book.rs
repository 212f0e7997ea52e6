//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book inventory record. The ISBN is the caller-supplied primary key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category_id: i32,
}

/// Create book request. The category is not checked against the categories
/// table here; the store's foreign-key constraint rejects unknown ids.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category_id: i32,
}

/// Update book request. Only title and author are updatable through this
/// path; ISBN and category_id are immutable.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
}
