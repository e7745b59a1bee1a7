//! Conversions between API bodies and engine types

use fairsim_core::model::{RiskFactor, RiskFactorSet, SimulationReport};

use crate::models::{ExceedanceDatum, SimulationRequest, SimulationResponse, defaults};

impl SimulationRequest {
    /// Resolve caller estimates against the defaults. `n_simulations` must already be validated.
    #[must_use]
    pub fn to_risk_factors(&self, n_simulations: usize) -> RiskFactorSet {
        let resolve = |factor: RiskFactor| {
            let def = match factor {
                RiskFactor::ThreatEventFrequency => &self.threat_event_frequency,
                RiskFactor::ThreatCapability => &self.threat_capability,
                RiskFactor::ControlStrength => &self.control_strength,
                RiskFactor::PrimaryLoss => &self.primary_loss,
                RiskFactor::SecondaryLossEventFrequency => &self.secondary_loss_event_frequency,
                RiskFactor::SecondaryLossEventMagnitude => &self.secondary_loss_event_magnitude,
            };
            def.resolve(defaults::estimate(factor))
        };

        RiskFactorSet {
            threat_event_frequency: resolve(RiskFactor::ThreatEventFrequency),
            threat_capability: resolve(RiskFactor::ThreatCapability),
            control_strength: resolve(RiskFactor::ControlStrength),
            primary_loss: resolve(RiskFactor::PrimaryLoss),
            secondary_loss_event_frequency: resolve(RiskFactor::SecondaryLossEventFrequency),
            secondary_loss_event_magnitude: resolve(RiskFactor::SecondaryLossEventMagnitude),
            n_simulations,
        }
    }
}

impl From<SimulationReport> for SimulationResponse {
    fn from(report: SimulationReport) -> Self {
        let stats = report.statistics;
        Self {
            loss_magnitude: stats.loss_magnitude,
            primary_loss: stats.primary_loss,
            secondary_loss: stats.secondary_loss,
            risk: stats.risk,
            loss_event_frequency: stats.loss_event_frequency,
            secondary_loss_event_frequency: stats.secondary_loss_event_frequency,
            vulnerability: stats.vulnerability,
            loss_exceedance_data: report
                .curve
                .points
                .into_iter()
                .map(|p| ExceedanceDatum {
                    probability: p.probability,
                    loss_exposure: p.loss_exposure,
                })
                .collect(),
            seed: report.seed,
            n_simulations: report.n_simulations,
        }
    }
}
