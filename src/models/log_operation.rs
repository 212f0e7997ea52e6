//! Borrow/return log model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Borrow/return log entry. `id` is the borrowing librarian's id;
/// `return_date` is always derived server-side from `borrow_date`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LogOperation {
    pub log_id: i32,
    pub id: i32,
    pub name: String,
    pub title: String,
    pub borrow_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Create log entry request. `log_id` is server-generated and
/// `return_date` is computed, so neither is accepted from the caller.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLogOperation {
    pub id: i32,
    pub name: String,
    pub title: String,
    /// Defaults to today when omitted
    pub borrow_date: Option<NaiveDate>,
}

/// Update log entry request. Only name and title are updatable.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateLogOperation {
    pub name: String,
    pub title: String,
}
