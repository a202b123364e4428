//! Field rules for roles and permissions.
//!
//! Length bounds are declared on the request DTOs with `validator` derives
//! and mirror the column widths in the migrations. [`validate_fields`] runs
//! them and folds the result into a [`CoreError`]. Blank-string and NUL
//! checks live here because `validator` length rules count whitespace as
//! content, and PostgreSQL `text` cannot store `\0`.

use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Entity names (used in NotFound errors)
// ---------------------------------------------------------------------------

pub const ENTITY_ROLE: &str = "Role";
pub const ENTITY_PERMISSION: &str = "Permission";
pub const ENTITY_ROLE_PERMISSION: &str = "RolePermission";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Run the derived `validator` rules on a DTO.
///
/// All field messages are joined into one `CoreError::Validation`, sorted by
/// field name so the output is stable.
pub fn validate_fields<T: Validate>(input: &T) -> Result<(), CoreError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();

    Err(CoreError::Validation(messages.join("; ")))
}

/// Reject an empty or whitespace-only required string.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Reject a string containing a NUL character.
pub fn reject_nul(field: &str, value: &str) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}

/// Validate the fields of a role create or update.
///
/// `role_info` may be empty; only the name identifies a role.
pub fn validate_role(role_name: &str, role_info: &str) -> Result<(), CoreError> {
    require_non_blank("role_name", role_name)?;
    reject_nul("role_name", role_name)?;
    reject_nul("role_info", role_info)
}

/// Validate the three descriptive fields of a permission.
pub fn validate_permission(
    permission_name: &str,
    resource_type_name: &str,
    operator_name: &str,
) -> Result<(), CoreError> {
    for (field, value) in [
        ("permission_name", permission_name),
        ("resource_type_name", resource_type_name),
        ("operator_name", operator_name),
    ] {
        require_non_blank(field, value)?;
        reject_nul(field, value)?;
    }
    Ok(())
}
