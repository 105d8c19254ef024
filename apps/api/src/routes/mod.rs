pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::prospects::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/prospects/search", post(handlers::handle_search))
        .route(
            "/api/v1/prospects/icp/default",
            get(handlers::handle_default_icp),
        )
        .route(
            "/api/v1/prospects/schema",
            get(handlers::handle_response_schema),
        )
        .with_state(state)
}
