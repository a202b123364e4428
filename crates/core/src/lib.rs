pub mod error;
pub mod rbac;
pub mod types;
