// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::queue_repo::QueueRepo;
use crate::series::ViewerZone;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) queue_repo: Arc<QueueRepo>,
    pub(crate) zone: ViewerZone,
    pub(crate) config: AppConfig,
}

pub fn app(queue_repo: Arc<QueueRepo>, config: AppConfig) -> Router {
    let state = AppState {
        queue_repo,
        zone: ViewerZone::from_offset_minutes(config.display.utc_offset_minutes),
        config,
    };
    Router::new()
        .route("/", get(|| async { "queuewatch" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/ranges", get(http::ranges_handler)) // GET /api/ranges
        .route("/api/servers/{server_id}/chart", get(http::chart_handler)) // GET /api/servers/{id}/chart
        .route("/ws/servers/{server_id}/chart", get(ws::ws_chart)) // WS /ws/servers/{id}/chart
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
