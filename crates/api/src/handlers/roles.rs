//! Handlers for the `/roles` resource and its permission grants.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rolekeeper_core::error::CoreError;
use rolekeeper_core::rbac::{self, ENTITY_PERMISSION, ENTITY_ROLE, ENTITY_ROLE_PERMISSION};
use rolekeeper_core::types::DbId;
use rolekeeper_db::models::role::{CreateRole, UpdateRole};
use rolekeeper_db::repositories::{PermissionRepo, RoleRepo};
use rolekeeper_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for a grant request.
#[derive(Debug, Serialize)]
pub struct GrantResponse {
    /// `false` when the role already held the permission.
    pub granted: bool,
}

fn role_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_ROLE,
        id,
    })
}

async fn ensure_role_exists(pool: &DbPool, role_id: DbId) -> AppResult<()> {
    RoleRepo::find_by_id(pool, role_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| role_not_found(role_id))
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// GET /v1/roles
///
/// List all roles in creation order.
pub async fn list_roles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(roles))
}

/// POST /v1/roles
///
/// Create a role. Returns 201 with the created row.
pub async fn create_role(
    State(state): State<AppState>,
    Json(input): Json<CreateRole>,
) -> AppResult<impl IntoResponse> {
    rbac::validate_role(&input.role_name, &input.role_info)?;
    rbac::validate_fields(&input)?;

    let role = RoleRepo::create(&state.pool, &input).await?;

    tracing::info!(role_id = role.id, role_name = %role.role_name, "Role created");

    Ok((StatusCode::CREATED, Json(role)))
}

/// GET /v1/roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let role = RoleRepo::find_by_id(&state.pool, role_id)
        .await?
        .ok_or_else(|| role_not_found(role_id))?;

    Ok(Json(role))
}

/// PUT /v1/roles/{id}
///
/// Replace a role's name and info.
pub async fn update_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
    Json(input): Json<UpdateRole>,
) -> AppResult<impl IntoResponse> {
    rbac::validate_role(&input.role_name, &input.role_info)?;
    rbac::validate_fields(&input)?;

    let role = RoleRepo::update(&state.pool, role_id, &input)
        .await?
        .ok_or_else(|| role_not_found(role_id))?;

    tracing::info!(role_id, role_name = %role.role_name, "Role updated");

    Ok(Json(role))
}

/// DELETE /v1/roles/{id}
///
/// Delete a role and its grants. Returns 200, or 404 for an unknown id.
pub async fn delete_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !RoleRepo::delete(&state.pool, role_id).await? {
        return Err(role_not_found(role_id));
    }

    tracing::info!(role_id, "Role deleted");

    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Grants
// ---------------------------------------------------------------------------

/// GET /v1/roles/{id}/permissions
pub async fn list_role_permissions(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_role_exists(&state.pool, role_id).await?;

    let permissions = RoleRepo::list_permissions(&state.pool, role_id).await?;
    Ok(Json(permissions))
}

/// PUT /v1/roles/{id}/permissions/{permission_id}
///
/// Grant a permission to a role. Repeating the call is a no-op that
/// reports `granted: false`.
pub async fn grant_role_permission(
    State(state): State<AppState>,
    Path((role_id, permission_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    ensure_role_exists(&state.pool, role_id).await?;
    if PermissionRepo::find_by_id(&state.pool, permission_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY_PERMISSION,
            id: permission_id,
        }));
    }

    let granted = RoleRepo::grant_permission(&state.pool, role_id, permission_id).await?;

    if granted {
        tracing::info!(role_id, permission_id, "Permission granted to role");
    }

    Ok(Json(GrantResponse { granted }))
}

/// DELETE /v1/roles/{id}/permissions/{permission_id}
///
/// Revoke a grant. An unknown role reports the role as missing; a known role
/// without the grant reports the grant as missing.
pub async fn revoke_role_permission(
    State(state): State<AppState>,
    Path((role_id, permission_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    ensure_role_exists(&state.pool, role_id).await?;

    if !RoleRepo::revoke_permission(&state.pool, role_id, permission_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY_ROLE_PERMISSION,
            id: permission_id,
        }));
    }

    tracing::info!(role_id, permission_id, "Permission revoked from role");

    Ok(StatusCode::OK)
}
