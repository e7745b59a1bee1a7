pub mod simulations;

pub use simulations::simulation_routes;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full application router with middleware
pub fn app() -> Router {
    Router::new()
        .merge(simulation_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
