#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use invitation_core::media::{MediaCatalog, MediaId, MediaItem, MediaKind};
use sqlx::PgPool;
use tower::ServiceExt;

use invitation_api::config::ServerConfig;
use invitation_api::router::build_app_router;
use invitation_api::state::AppState;

pub const TEST_ACK_MESSAGE: &str = "Thank you for your wishes!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        gallery_config: PathBuf::from("content/gallery.json"),
        wish_ack_message: TEST_ACK_MESSAGE.to_string(),
    }
}

/// Two-item gallery: an image followed by a video.
pub fn test_gallery() -> MediaCatalog {
    MediaCatalog::new(vec![
        MediaItem {
            id: MediaId(1),
            kind: MediaKind::Image,
            url: "https://cdn.example.com/gallery/1.jpg".to_string(),
            span: "col-span-2 row-span-3".to_string(),
        },
        MediaItem {
            id: MediaId(2),
            kind: MediaKind::Video,
            url: "https://cdn.example.com/gallery/2.mp4".to_string(),
            span: "col-span-2 row-span-6".to_string(),
        },
    ])
    .unwrap()
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        gallery: test_gallery(),
    };
    build_app_router(state, &config)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
