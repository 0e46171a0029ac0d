use axum::routing::get;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// GET    /    list_comments
/// POST   /    create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(comments::list_comments).post(comments::create_comment))
}
