use std::sync::Arc;

use invitation_core::media::MediaCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: invitation_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Gallery media list, loaded once at startup.
    pub gallery: MediaCatalog,
}
