//! Repository for the `permissions` table.

use rolekeeper_core::types::DbId;
use sqlx::PgPool;

use crate::models::permission::{CreatePermission, Permission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, permission_name, resource_type_name, operator_name, \
    created_at, updated_at";

/// Provides create and read operations for permissions.
///
/// Permissions are never updated or deleted through this repository.
pub struct PermissionRepo;

impl PermissionRepo {
    /// Insert a new permission, returning the created row.
    pub async fn create(pool: &PgPool, dto: &CreatePermission) -> Result<Permission, sqlx::Error> {
        let query = format!(
            "INSERT INTO permissions (permission_name, resource_type_name, operator_name) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Permission>(&query)
            .bind(&dto.permission_name)
            .bind(&dto.resource_type_name)
            .bind(&dto.operator_name)
            .fetch_one(pool)
            .await
    }

    /// Find a permission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Permission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM permissions WHERE id = $1");
        sqlx::query_as::<_, Permission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all permissions ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Permission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM permissions ORDER BY id ASC");
        sqlx::query_as::<_, Permission>(&query)
            .fetch_all(pool)
            .await
    }
}
