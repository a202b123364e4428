//! Repository for the `roles` and `role_permissions` tables.

use rolekeeper_core::types::DbId;
use sqlx::PgPool;

use crate::models::permission::Permission;
use crate::models::role::{CreateRole, Role, UpdateRole};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, role_name, role_info, created_at, updated_at";

/// Permission columns qualified for the `role_permissions` join.
const GRANTED_PERMISSION_COLUMNS: &str = "\
    p.id, p.permission_name, p.resource_type_name, p.operator_name, \
    p.created_at, p.updated_at";

/// Provides CRUD operations for roles and their permission grants.
pub struct RoleRepo;

impl RoleRepo {
    // -----------------------------------------------------------------------
    // Roles
    // -----------------------------------------------------------------------

    /// Insert a new role, returning the created row.
    pub async fn create(pool: &PgPool, dto: &CreateRole) -> Result<Role, sqlx::Error> {
        let query = format!(
            "INSERT INTO roles (role_name, role_info) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(&dto.role_name)
            .bind(&dto.role_info)
            .fetch_one(pool)
            .await
    }

    /// Find a role by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all roles in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY id ASC");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Replace a role's name and info.
    ///
    /// Returns `None` if no role with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateRole,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET role_name = $2, role_info = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .bind(&dto.role_name)
            .bind(&dto.role_info)
            .fetch_optional(pool)
            .await
    }

    /// Delete a role by ID. Its grants are removed by `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Permission grants
    // -----------------------------------------------------------------------

    /// Grant a permission to a role.
    ///
    /// Idempotent: returns `false` if the grant already existed.
    pub async fn grant_permission(
        pool: &PgPool,
        role_id: DbId,
        permission_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO role_permissions (role_id, permission_id) \
             VALUES ($1, $2) \
             ON CONFLICT (role_id, permission_id) DO NOTHING",
        )
        .bind(role_id)
        .bind(permission_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke a permission from a role.
    ///
    /// Returns `true` if a grant was removed.
    pub async fn revoke_permission(
        pool: &PgPool,
        role_id: DbId,
        permission_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM role_permissions WHERE role_id = $1 AND permission_id = $2")
                .bind(role_id)
                .bind(permission_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the permissions granted to a role, ordered by permission ID.
    pub async fn list_permissions(
        pool: &PgPool,
        role_id: DbId,
    ) -> Result<Vec<Permission>, sqlx::Error> {
        let query = format!(
            "SELECT {GRANTED_PERMISSION_COLUMNS} \
             FROM permissions p \
             JOIN role_permissions rp ON rp.permission_id = p.id \
             WHERE rp.role_id = $1 \
             ORDER BY p.id ASC"
        );
        sqlx::query_as::<_, Permission>(&query)
            .bind(role_id)
            .fetch_all(pool)
            .await
    }
}
