use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(gallery::list_media))
}
