use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::defaults::defaults_handler;
use crate::nearest::{nearest_v1_handler, nearest_v2_handler};
use crate::state::AppState;

async fn hello_handler() -> &'static str {
    "Hello World"
}

pub fn app(state: Arc<AppState>, ui_dir: &Path) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/hello", get(hello_handler))
        .route("/v1/defaults", get(defaults_handler))
        .route("/v1/nearest", post(nearest_v1_handler))
        .route("/v2/nearest", post(nearest_v2_handler))
        .fallback_service(ServeDir::new(ui_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(state)
}
