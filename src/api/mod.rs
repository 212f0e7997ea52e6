//! API handlers for the Librarium REST endpoints

pub mod auth;
pub mod books;
pub mod categories;
pub mod health;
pub mod librarians;
pub mod log_operations;
pub mod openapi;

use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope for mutating operations. The `status_code` field
/// mirrors the HTTP status of the response.
#[derive(Serialize, ToSchema)]
pub struct SuccessResponse {
    pub status_code: u16,
    pub message: String,
}

impl SuccessResponse {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }
}
