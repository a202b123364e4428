//! Permission entity model and DTOs.

use rolekeeper_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A permission row from the `permissions` table.
///
/// A permission allows `operator_name` on resources of `resource_type_name`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Permission {
    pub id: DbId,
    pub permission_name: String,
    pub resource_type_name: String,
    pub operator_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a permission.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePermission {
    #[validate(length(min = 1, max = 64, message = "permission_name must be 1-64 characters"))]
    pub permission_name: String,
    #[validate(length(
        min = 1,
        max = 64,
        message = "resource_type_name must be 1-64 characters"
    ))]
    pub resource_type_name: String,
    #[validate(length(min = 1, max = 64, message = "operator_name must be 1-64 characters"))]
    pub operator_name: String,
}
