pub mod health;
pub mod roles;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /roles                                       list, create
/// /roles/                                      create (trailing-slash form)
/// /roles/{id}                                  get, update, delete
/// /roles/{id}/permissions                      list granted permissions
/// /roles/{id}/permissions/{permission_id}      grant (PUT), revoke (DELETE)
///
/// /roles/permission                            list, create permissions
/// /roles/permission/{id}                       get permission
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(roles::router())
}
