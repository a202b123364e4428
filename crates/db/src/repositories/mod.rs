//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod permission_repo;
pub mod role_repo;

pub use permission_repo::PermissionRepo;
pub use role_repo::RoleRepo;
