use crate::api::page::get_page;
use crate::api::stream::stream_supplies;
use crate::api::supplies::{get_supplies, get_token_supply};
use crate::app_state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub fn create_router(app_state: Arc<AppState>, allowed_origins: Vec<String>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin_allowed(&allowed_origins, origin.to_str().unwrap_or(""))
        }))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(get_page))
        .route("/api/supplies", get(get_supplies))
        .route("/api/supplies/{address}", get(get_token_supply))
        .route("/sse/supplies", get(stream_supplies))
        .layer(cors)
        .with_state(app_state)
}

fn origin_allowed(allowed_origins: &[String], origin: &str) -> bool {
    // no allowed origins configured means the board can be embedded anywhere
    if allowed_origins.is_empty() {
        return true;
    }

    allowed_origins.iter().any(|allowed| {
        if allowed.contains('*') {
            let pattern = allowed.replace('*', "");
            origin.contains(&pattern)
        } else {
            origin == allowed
        }
    })
}
