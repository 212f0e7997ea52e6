//! Borrow/return log endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::log_operation::{CreateLogOperation, LogOperation, UpdateLogOperation},
};

use super::SuccessResponse;

/// Record a borrow operation
#[utoipa::path(
    post,
    path = "/Log_Operations",
    tag = "log_operations",
    request_body = CreateLogOperation,
    responses(
        (status = 201, description = "Log operation created", body = SuccessResponse)
    )
)]
pub async fn create_log_operation(
    State(state): State<crate::AppState>,
    Json(log): Json<CreateLogOperation>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    state.services.log_operations.create(log).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(201, "Log operation added successfully")),
    ))
}

/// List all log operations
#[utoipa::path(
    get,
    path = "/Log_Operations",
    tag = "log_operations",
    responses(
        (status = 200, description = "List of log operations", body = [LogOperation])
    )
)]
pub async fn list_log_operations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LogOperation>>> {
    let logs = state.services.log_operations.list().await?;
    Ok(Json(logs))
}

/// Get a log operation by log_id
#[utoipa::path(
    get,
    path = "/Log_Operations/{log_id}",
    tag = "log_operations",
    params(
        ("log_id" = i32, Path, description = "Log entry ID")
    ),
    responses(
        (status = 200, description = "Log operation details", body = LogOperation),
        (status = 404, description = "Log operation not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_log_operation(
    State(state): State<crate::AppState>,
    Path(log_id): Path<i32>,
) -> AppResult<Json<LogOperation>> {
    let log = state.services.log_operations.get_by_id(log_id).await?;
    Ok(Json(log))
}

/// Update a log operation's name and title
#[utoipa::path(
    put,
    path = "/Log_Operations/{log_id}",
    tag = "log_operations",
    params(
        ("log_id" = i32, Path, description = "Log entry ID")
    ),
    request_body = UpdateLogOperation,
    responses(
        (status = 200, description = "Log operation updated", body = SuccessResponse),
        (status = 404, description = "Log operation not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_log_operation(
    State(state): State<crate::AppState>,
    Path(log_id): Path<i32>,
    Json(log): Json<UpdateLogOperation>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.log_operations.update(log_id, log).await?;
    Ok(Json(SuccessResponse::new(
        200,
        "Log operation updated successfully",
    )))
}

/// Delete a log operation by log_id
#[utoipa::path(
    delete,
    path = "/Log_Operations/{log_id}",
    tag = "log_operations",
    params(
        ("log_id" = i32, Path, description = "Log entry ID")
    ),
    responses(
        (status = 200, description = "Log operation deleted", body = SuccessResponse),
        (status = 404, description = "Log operation not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_log_operation(
    State(state): State<crate::AppState>,
    Path(log_id): Path<i32>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.log_operations.delete(log_id).await?;
    Ok(Json(SuccessResponse::new(
        200,
        "Log operation deleted successfully",
    )))
}
