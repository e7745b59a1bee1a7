use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;

pub fn simulation_routes() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        // Run simulation
        .route("/simulate", post(handlers::run_simulation))
        .route("/simulate/", post(handlers::run_simulation))
}
