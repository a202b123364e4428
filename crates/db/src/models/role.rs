//! Role entity model and DTOs.

use rolekeeper_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub role_name: String,
    pub role_info: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a role.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRole {
    #[validate(length(min = 1, max = 64, message = "role_name must be 1-64 characters"))]
    pub role_name: String,
    #[validate(length(max = 512, message = "role_info must be at most 512 characters"))]
    pub role_info: String,
}

/// DTO for replacing a role's fields. Both fields are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRole {
    #[validate(length(min = 1, max = 64, message = "role_name must be 1-64 characters"))]
    pub role_name: String,
    #[validate(length(max = 512, message = "role_info must be at most 512 characters"))]
    pub role_info: String,
}
