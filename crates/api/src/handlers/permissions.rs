//! Handlers for the `/roles/permission` resource.
//!
//! Permissions can be created and read; there is no update or delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rolekeeper_core::error::CoreError;
use rolekeeper_core::rbac::{self, ENTITY_PERMISSION};
use rolekeeper_core::types::DbId;
use rolekeeper_db::models::permission::CreatePermission;
use rolekeeper_db::repositories::PermissionRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /v1/roles/permission
pub async fn list_permissions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let permissions = PermissionRepo::list(&state.pool).await?;
    Ok(Json(permissions))
}

/// POST /v1/roles/permission
///
/// Create a permission. Returns 201 with the created row.
pub async fn create_permission(
    State(state): State<AppState>,
    Json(input): Json<CreatePermission>,
) -> AppResult<impl IntoResponse> {
    rbac::validate_permission(
        &input.permission_name,
        &input.resource_type_name,
        &input.operator_name,
    )?;
    rbac::validate_fields(&input)?;

    let permission = PermissionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        permission_id = permission.id,
        permission_name = %permission.permission_name,
        resource_type_name = %permission.resource_type_name,
        operator_name = %permission.operator_name,
        "Permission created",
    );

    Ok((StatusCode::CREATED, Json(permission)))
}

/// GET /v1/roles/permission/{id}
pub async fn get_permission(
    State(state): State<AppState>,
    Path(permission_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let permission = PermissionRepo::find_by_id(&state.pool, permission_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_PERMISSION,
            id: permission_id,
        }))?;

    Ok(Json(permission))
}
