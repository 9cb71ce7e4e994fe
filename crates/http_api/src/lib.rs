mod errors;
mod handlers;
mod middleware;
mod state;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::{CompressionLayer, predicate::SizeAbove};
use tower_http::cors::CorsLayer;

pub use errors::HttpError;
pub use state::HttpState;

/// Responses smaller than this are sent uncompressed.
pub const MIN_COMPRESS_SIZE: u16 = 1000;

pub fn router(state: HttpState) -> Router<()> {
    let api = Router::new()
        .route("/worked-hours", get(handlers::worked_hours))
        .route("/fill-worked-hours", post(handlers::fill_worked_hours))
        .route("/recorded-hours", get(handlers::recorded_hours))
        .route_layer(axum_middleware::from_fn(middleware::require_json_accept));

    Router::new()
        .route("/api/health", get(handlers::health))
        .nest("/api/v1", api)
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(MIN_COMPRESS_SIZE)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
