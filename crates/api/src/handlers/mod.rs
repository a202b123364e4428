//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input via `rolekeeper_core::rbac`, delegate to the
//! corresponding repository in `rolekeeper_db`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod permissions;
pub mod roles;
