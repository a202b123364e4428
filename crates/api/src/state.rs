use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each repository call checks out a
    /// connection for the duration of one query.
    pub pool: rolekeeper_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
