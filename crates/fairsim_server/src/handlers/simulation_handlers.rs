use axum::Json;
use fairsim_core::simulation;
use serde_json::{Value, json};

use crate::error::{ApiError, ApiResult};
use crate::models::{SimulationRequest, SimulationResponse};
use crate::validation;

pub async fn index() -> &'static str {
    "FAIR Model Simulation API"
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Run one FAIR simulation and return its statistics and loss exceedance curve
pub async fn run_simulation(
    Json(req): Json<SimulationRequest>,
) -> ApiResult<Json<SimulationResponse>> {
    let n_simulations = validation::validate_n_simulations(req.n_simulations)?;
    let factors = req.to_risk_factors(n_simulations);
    let seed = req.seed.unwrap_or_else(rand::random);

    tracing::info!(n_simulations, seed, "running simulation");

    // CPU-bound; keep it off the async workers
    let report = tokio::task::spawn_blocking(move || simulation::run(&factors, seed))
        .await
        .map_err(|e| {
            tracing::error!("simulation task panicked: {e}");
            ApiError::InternalError
        })??;

    Ok(Json(report.into()))
}
