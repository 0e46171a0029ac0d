pub mod comments;
pub mod gallery;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /comments        list (GET), create (POST)
/// /gallery         list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/comments", comments::router())
        .nest("/gallery", gallery::router())
}
