use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::info;

use schoolhouse_core::errors::ErrorResponse;
use schoolhouse_core::{AppError, Pages, PaginationParams};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::model::{CreateSchoolRequest, SchoolResponse, UpdateSchoolRequest};

/// Logs the decoder's complaint and answers with a bare 400.
fn malformed_body(rejection: JsonRejection) -> AppError {
    info!(error = %rejection.body_text(), "Rejected malformed request body");
    AppError::bad_request(rejection)
}

#[utoipa::path(
    get,
    path = "/school/{id}",
    params(
        ("id" = String, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "School details", body = SchoolResponse),
        (status = 404, description = "School not found", body = ErrorResponse)
    ),
    tag = "Schools"
)]
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SchoolResponse>, AppError> {
    let school = state.schools.get(&id).await?;
    Ok(Json(school))
}

#[utoipa::path(
    get,
    path = "/school",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated list of schools", body = Pages<SchoolResponse>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "Schools"
)]
pub async fn query_schools(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<Pages<SchoolResponse>>, AppError> {
    let Query(params) = params.map_err(|e| {
        info!(error = %e.body_text(), "Rejected invalid query parameters");
        AppError::bad_request(e)
    })?;

    let count = state.schools.count().await?;
    let mut pages = params.resolve(count);
    pages.items = state.schools.query(pages.offset(), pages.limit()).await?;

    Ok(Json(pages))
}

#[utoipa::path(
    post,
    path = "/school",
    request_body = CreateSchoolRequest,
    responses(
        (status = 201, description = "School created successfully", body = SchoolResponse),
        (status = 400, description = "Malformed body or validation failure", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
pub async fn create_school(
    State(state): State<AppState>,
    auth_user: AuthUser,
    payload: Result<Json<CreateSchoolRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SchoolResponse>), AppError> {
    let Json(request) = payload.map_err(malformed_body)?;

    let school = state.schools.create(request).await?;
    info!(school.id = %school.id, actor = %auth_user.subject(), "School created via API");
    Ok((StatusCode::CREATED, Json(school)))
}

#[utoipa::path(
    put,
    path = "/school/{id}",
    params(
        ("id" = String, Path, description = "School ID")
    ),
    request_body = UpdateSchoolRequest,
    responses(
        (status = 200, description = "School updated successfully", body = SchoolResponse),
        (status = 400, description = "Malformed body or validation failure", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "School not found", body = ErrorResponse)
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
pub async fn update_school(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSchoolRequest>, JsonRejection>,
) -> Result<Json<SchoolResponse>, AppError> {
    let Json(request) = payload.map_err(malformed_body)?;

    let school = state.schools.update(&id, request).await?;
    info!(school.id = %id, actor = %auth_user.subject(), "School updated via API");
    Ok(Json(school))
}

#[utoipa::path(
    delete,
    path = "/school/{id}",
    params(
        ("id" = String, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "School deleted, last known value returned", body = SchoolResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "School not found", body = ErrorResponse)
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
pub async fn delete_school(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<SchoolResponse>, AppError> {
    let school = state.schools.delete(&id).await?;
    info!(school.id = %id, actor = %auth_user.subject(), "School deleted via API");
    Ok(Json(school))
}
