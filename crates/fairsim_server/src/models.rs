//! Request and response bodies for the simulation API
//!
//! Every factor in a request is optional, field by field. Anything the caller
//! leaves out is filled from [`defaults`] before the engine sees it.

use fairsim_core::model::{LossSummary, RateSummary, ThreePointEstimate, VulnerabilitySummary};
use serde::{Deserialize, Serialize};

/// Illustrative inputs used for omitted estimates
pub mod defaults {
    use fairsim_core::model::{RiskFactor, ThreePointEstimate};

    pub const N_SIMULATIONS: i64 = 10_000;

    pub const THREAT_EVENT_FREQUENCY: ThreePointEstimate =
        ThreePointEstimate::new(0.5, 1.25, 2.0);
    pub const THREAT_CAPABILITY: ThreePointEstimate = ThreePointEstimate::new(0.6, 0.85, 0.99);
    pub const CONTROL_STRENGTH: ThreePointEstimate = ThreePointEstimate::new(0.75, 0.85, 0.95);
    pub const PRIMARY_LOSS: ThreePointEstimate =
        ThreePointEstimate::new(4_000.0, 16_000.0, 216_000.0);
    pub const SECONDARY_LOSS_EVENT_FREQUENCY: ThreePointEstimate =
        ThreePointEstimate::new(0.95, 0.97, 0.99);
    pub const SECONDARY_LOSS_EVENT_MAGNITUDE: ThreePointEstimate =
        ThreePointEstimate::new(3_350_000.0, 3_850_000.0, 8_000_000.0);

    #[must_use]
    pub fn estimate(factor: RiskFactor) -> ThreePointEstimate {
        match factor {
            RiskFactor::ThreatEventFrequency => THREAT_EVENT_FREQUENCY,
            RiskFactor::ThreatCapability => THREAT_CAPABILITY,
            RiskFactor::ControlStrength => CONTROL_STRENGTH,
            RiskFactor::PrimaryLoss => PRIMARY_LOSS,
            RiskFactor::SecondaryLossEventFrequency => SECONDARY_LOSS_EVENT_FREQUENCY,
            RiskFactor::SecondaryLossEventMagnitude => SECONDARY_LOSS_EVENT_MAGNITUDE,
        }
    }
}

fn default_n_simulations() -> i64 {
    defaults::N_SIMULATIONS
}

/// A three-point estimate as sent by the caller; missing fields fall back to defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
}

impl EstimateDef {
    #[must_use]
    pub fn resolve(&self, fallback: ThreePointEstimate) -> ThreePointEstimate {
        ThreePointEstimate {
            low: self.low.unwrap_or(fallback.low),
            mode: self.mode.unwrap_or(fallback.mode),
            high: self.high.unwrap_or(fallback.high),
        }
    }
}

impl From<ThreePointEstimate> for EstimateDef {
    fn from(e: ThreePointEstimate) -> Self {
        Self {
            low: Some(e.low),
            mode: Some(e.mode),
            high: Some(e.high),
        }
    }
}

/// Body of `POST /simulate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(default = "default_n_simulations")]
    pub n_simulations: i64,
    /// Seed for reproducible runs; a random one is chosen when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub threat_event_frequency: EstimateDef,
    #[serde(default)]
    pub secondary_loss_event_frequency: EstimateDef,
    #[serde(default)]
    pub secondary_loss_event_magnitude: EstimateDef,
    #[serde(default)]
    pub threat_capability: EstimateDef,
    #[serde(default)]
    pub primary_loss: EstimateDef,
    #[serde(default)]
    pub control_strength: EstimateDef,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            n_simulations: defaults::N_SIMULATIONS,
            seed: None,
            threat_event_frequency: EstimateDef::default(),
            secondary_loss_event_frequency: EstimateDef::default(),
            secondary_loss_event_magnitude: EstimateDef::default(),
            threat_capability: EstimateDef::default(),
            primary_loss: EstimateDef::default(),
            control_strength: EstimateDef::default(),
        }
    }
}

/// One loss exceedance point, keyed the way chart clients expect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExceedanceDatum {
    #[serde(rename = "Probability of Loss or Greater")]
    pub probability: f64,
    #[serde(rename = "Loss Exposure")]
    pub loss_exposure: f64,
}

/// Body returned by `POST /simulate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub loss_magnitude: LossSummary,
    pub primary_loss: LossSummary,
    pub secondary_loss: LossSummary,
    pub risk: LossSummary,
    pub loss_event_frequency: RateSummary,
    pub secondary_loss_event_frequency: RateSummary,
    pub vulnerability: VulnerabilitySummary,
    #[serde(rename = "lossExceedanceData")]
    pub loss_exceedance_data: Vec<ExceedanceDatum>,
    pub seed: u64,
    pub n_simulations: usize,
}
