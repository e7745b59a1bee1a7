//! Risk Factor Builder
//!
//! Fluent API for assembling a [`RiskFactorSet`]. Every factor must be given
//! before `build()`; the result is validated the same way the engine validates it.
//!
//! # Example
//!
//! ```
//! use fairsim_core::config::RiskFactorSetBuilder;
//!
//! let factors = RiskFactorSetBuilder::new()
//!     .trials(10_000)
//!     .threat_event_frequency(0.5, 1.25, 2.0)
//!     .threat_capability(0.6, 0.85, 0.99)
//!     .control_strength(0.75, 0.85, 0.95)
//!     .primary_loss(4_000.0, 16_000.0, 216_000.0)
//!     .secondary_loss_event_frequency(0.95, 0.97, 0.99)
//!     .secondary_loss_event_magnitude(3_350_000.0, 3_850_000.0, 8_000_000.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(factors.n_simulations, 10_000);
//! ```

use crate::error::{EngineError, Result};
use crate::model::{RiskFactor, RiskFactorSet, ThreePointEstimate};

/// Trial count used when none is set
pub const DEFAULT_TRIALS: usize = 10_000;

/// Builder for [`RiskFactorSet`]
#[derive(Debug, Clone)]
pub struct RiskFactorSetBuilder {
    n_simulations: usize,
    estimates: [Option<ThreePointEstimate>; 6],
}

impl Default for RiskFactorSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskFactorSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            n_simulations: DEFAULT_TRIALS,
            estimates: [None; 6],
        }
    }

    /// Set the number of Monte Carlo trials
    #[must_use]
    pub fn n_simulations(mut self, n: usize) -> Self {
        self.n_simulations = n;
        self
    }

    /// Alias for n_simulations
    #[must_use]
    pub fn trials(self, n: usize) -> Self {
        self.n_simulations(n)
    }

    /// Set the estimate for any factor
    #[must_use]
    pub fn estimate(mut self, factor: RiskFactor, estimate: ThreePointEstimate) -> Self {
        self.estimates[factor.index()] = Some(estimate);
        self
    }

    /// Fix a factor to a single value
    #[must_use]
    pub fn constant(self, factor: RiskFactor, value: f64) -> Self {
        self.estimate(factor, ThreePointEstimate::constant(value))
    }

    // =========================================================================
    // Per-factor shorthands
    // =========================================================================

    #[must_use]
    pub fn threat_event_frequency(self, low: f64, mode: f64, high: f64) -> Self {
        self.estimate(
            RiskFactor::ThreatEventFrequency,
            ThreePointEstimate::new(low, mode, high),
        )
    }

    #[must_use]
    pub fn threat_capability(self, low: f64, mode: f64, high: f64) -> Self {
        self.estimate(
            RiskFactor::ThreatCapability,
            ThreePointEstimate::new(low, mode, high),
        )
    }

    #[must_use]
    pub fn control_strength(self, low: f64, mode: f64, high: f64) -> Self {
        self.estimate(
            RiskFactor::ControlStrength,
            ThreePointEstimate::new(low, mode, high),
        )
    }

    #[must_use]
    pub fn primary_loss(self, low: f64, mode: f64, high: f64) -> Self {
        self.estimate(
            RiskFactor::PrimaryLoss,
            ThreePointEstimate::new(low, mode, high),
        )
    }

    #[must_use]
    pub fn secondary_loss_event_frequency(self, low: f64, mode: f64, high: f64) -> Self {
        self.estimate(
            RiskFactor::SecondaryLossEventFrequency,
            ThreePointEstimate::new(low, mode, high),
        )
    }

    #[must_use]
    pub fn secondary_loss_event_magnitude(self, low: f64, mode: f64, high: f64) -> Self {
        self.estimate(
            RiskFactor::SecondaryLossEventMagnitude,
            ThreePointEstimate::new(low, mode, high),
        )
    }

    /// Finish the set. Fails if a factor is missing or any input is invalid.
    pub fn build(self) -> Result<RiskFactorSet> {
        let get = |factor: RiskFactor| {
            self.estimates[factor.index()].ok_or_else(|| {
                EngineError::InvalidConfiguration(format!("no estimate given for {factor}"))
            })
        };

        let factors = RiskFactorSet {
            threat_event_frequency: get(RiskFactor::ThreatEventFrequency)?,
            threat_capability: get(RiskFactor::ThreatCapability)?,
            control_strength: get(RiskFactor::ControlStrength)?,
            primary_loss: get(RiskFactor::PrimaryLoss)?,
            secondary_loss_event_frequency: get(RiskFactor::SecondaryLossEventFrequency)?,
            secondary_loss_event_magnitude: get(RiskFactor::SecondaryLossEventMagnitude)?,
            n_simulations: self.n_simulations,
        };

        factors.validate()?;
        Ok(factors)
    }
}
