//! Librarian account endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::librarian::{CreateLibrarian, Librarian},
};

use super::SuccessResponse;

/// Create a new librarian account
#[utoipa::path(
    post,
    path = "/Librarian",
    tag = "librarians",
    request_body = CreateLibrarian,
    responses(
        (status = 201, description = "Librarian created", body = SuccessResponse),
        (status = 400, description = "Invalid email, password, or phone number", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_librarian(
    State(state): State<crate::AppState>,
    Json(librarian): Json<CreateLibrarian>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    state.services.librarians.create(librarian).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(201, "Successfully added")),
    ))
}

/// List all librarians
#[utoipa::path(
    get,
    path = "/Librarian",
    tag = "librarians",
    responses(
        (status = 200, description = "List of librarians", body = [Librarian])
    )
)]
pub async fn list_librarians(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Librarian>>> {
    let librarians = state.services.librarians.list().await?;
    Ok(Json(librarians))
}

/// Get a librarian by ID
#[utoipa::path(
    get,
    path = "/Librarian/{id}",
    tag = "librarians",
    params(
        ("id" = i32, Path, description = "Librarian ID")
    ),
    responses(
        (status = 200, description = "Librarian details", body = Librarian),
        (status = 404, description = "Librarian not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_librarian(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Librarian>> {
    let librarian = state.services.librarians.get_by_id(id).await?;
    Ok(Json(librarian))
}

/// Delete a librarian by ID
#[utoipa::path(
    delete,
    path = "/Librarian/{id}",
    tag = "librarians",
    params(
        ("id" = i32, Path, description = "Librarian ID")
    ),
    responses(
        (status = 200, description = "Librarian deleted", body = SuccessResponse),
        (status = 404, description = "Librarian not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_librarian(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.librarians.delete(id).await?;
    Ok(Json(SuccessResponse::new(200, "Successfully deleted")))
}
