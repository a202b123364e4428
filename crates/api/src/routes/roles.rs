//! Route definitions for roles, permissions and grants.
//!
//! Permissions live under `/roles/permission`; the static segment takes
//! precedence over `/roles/{id}` in the router.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{permissions, roles};
use crate::state::AppState;

/// Role and permission routes, merged into `/v1`.
///
/// ```text
/// GET    /roles                                   -> list_roles
/// POST   /roles                                   -> create_role
/// POST   /roles/                                  -> create_role
/// GET    /roles/{id}                              -> get_role
/// PUT    /roles/{id}                              -> update_role
/// DELETE /roles/{id}                              -> delete_role
/// GET    /roles/{id}/permissions                  -> list_role_permissions
/// PUT    /roles/{id}/permissions/{permission_id}  -> grant_role_permission
/// DELETE /roles/{id}/permissions/{permission_id}  -> revoke_role_permission
/// GET    /roles/permission                        -> list_permissions
/// POST   /roles/permission                        -> create_permission
/// GET    /roles/permission/{id}                   -> get_permission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(roles::list_roles).post(roles::create_role))
        .route("/roles/", post(roles::create_role))
        .route(
            "/roles/permission",
            get(permissions::list_permissions).post(permissions::create_permission),
        )
        .route("/roles/permission/{id}", get(permissions::get_permission))
        .route(
            "/roles/{id}",
            get(roles::get_role)
                .put(roles::update_role)
                .delete(roles::delete_role),
        )
        .route(
            "/roles/{id}/permissions",
            get(roles::list_role_permissions),
        )
        .route(
            "/roles/{id}/permissions/{permission_id}",
            put(roles::grant_role_permission).delete(roles::revoke_role_permission),
        )
}
