//! Category model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book category from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
    pub shelf_no: Option<i32>,
}

/// Create/update category request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CategoryPayload {
    pub category_name: String,
    pub shelf_no: Option<i32>,
}
