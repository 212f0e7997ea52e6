//! Login endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::SuccessResponse;

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Verify librarian credentials
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = SuccessResponse),
        (status = 401, description = "Unknown email or wrong password", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<SuccessResponse>> {
    state
        .services
        .librarians
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(SuccessResponse::new(200, "Login successful")))
}
