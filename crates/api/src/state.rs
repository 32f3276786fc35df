use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is constructed once at startup and injected here; no module holds
/// an ambient database handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinelog_db::DbPool,
    /// Server configuration (bind address, CORS, JWT settings).
    pub config: Arc<ServerConfig>,
}
