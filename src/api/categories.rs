//! Category endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::category::{Category, CategoryPayload},
};

use super::SuccessResponse;

/// Create a new category
#[utoipa::path(
    post,
    path = "/Category/",
    tag = "categories",
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category created", body = SuccessResponse),
        (status = 400, description = "Category name already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    Json(category): Json<CategoryPayload>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.categories.create(category).await?;
    Ok(Json(SuccessResponse::new(
        200,
        "Category created successfully",
    )))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/Category/",
    tag = "categories",
    responses(
        (status = 200, description = "List of categories", body = [Category])
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.categories.list().await?;
    Ok(Json(categories))
}

/// Update a category's name and shelf number
#[utoipa::path(
    put,
    path = "/Category/{category_id}",
    tag = "categories",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category updated", body = SuccessResponse),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path(category_id): Path<i32>,
    Json(category): Json<CategoryPayload>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.categories.update(category_id, category).await?;
    Ok(Json(SuccessResponse::new(
        200,
        "Category updated successfully",
    )))
}
