use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::model::ThreePointEstimate;

/// The six FAIR inputs the engine samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    ThreatEventFrequency,
    ThreatCapability,
    ControlStrength,
    PrimaryLoss,
    SecondaryLossEventFrequency,
    SecondaryLossEventMagnitude,
}

impl RiskFactor {
    /// All factors in sampling order
    pub const ALL: [RiskFactor; 6] = [
        RiskFactor::ThreatEventFrequency,
        RiskFactor::ThreatCapability,
        RiskFactor::ControlStrength,
        RiskFactor::PrimaryLoss,
        RiskFactor::SecondaryLossEventFrequency,
        RiskFactor::SecondaryLossEventMagnitude,
    ];

    /// Position of this factor in [`RiskFactor::ALL`]
    #[must_use]
    pub fn index(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ThreatEventFrequency => "Threat Event Frequency",
            Self::ThreatCapability => "Threat Capability",
            Self::ControlStrength => "Control Strength",
            Self::PrimaryLoss => "Primary Loss",
            Self::SecondaryLossEventFrequency => "Secondary Loss Event Frequency",
            Self::SecondaryLossEventMagnitude => "Secondary Loss Event Magnitude",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs for one simulation run: an estimate for each FAIR factor plus the trial count.
///
/// Consumed by reference; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactorSet {
    pub threat_event_frequency: ThreePointEstimate,
    pub threat_capability: ThreePointEstimate,
    pub control_strength: ThreePointEstimate,
    pub primary_loss: ThreePointEstimate,
    pub secondary_loss_event_frequency: ThreePointEstimate,
    pub secondary_loss_event_magnitude: ThreePointEstimate,
    pub n_simulations: usize,
}

impl RiskFactorSet {
    /// Look up the estimate for a factor
    #[must_use]
    pub fn estimate(&self, factor: RiskFactor) -> &ThreePointEstimate {
        match factor {
            RiskFactor::ThreatEventFrequency => &self.threat_event_frequency,
            RiskFactor::ThreatCapability => &self.threat_capability,
            RiskFactor::ControlStrength => &self.control_strength,
            RiskFactor::PrimaryLoss => &self.primary_loss,
            RiskFactor::SecondaryLossEventFrequency => &self.secondary_loss_event_frequency,
            RiskFactor::SecondaryLossEventMagnitude => &self.secondary_loss_event_magnitude,
        }
    }

    /// Iterate over `(factor, estimate)` pairs in sampling order
    pub fn estimates(&self) -> impl Iterator<Item = (RiskFactor, &ThreePointEstimate)> {
        RiskFactor::ALL.into_iter().map(|f| (f, self.estimate(f)))
    }

    /// Reject unusable inputs before any sampling happens.
    ///
    /// The upper bound on `n_simulations` is left to callers.
    pub fn validate(&self) -> Result<()> {
        if self.n_simulations < 1 {
            return Err(EngineError::InvalidConfiguration(
                "n_simulations must be at least 1".to_string(),
            ));
        }

        for (factor, estimate) in self.estimates() {
            estimate.validate(factor)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> RiskFactorSet {
        RiskFactorSet {
            threat_event_frequency: ThreePointEstimate::new(0.5, 1.25, 2.0),
            threat_capability: ThreePointEstimate::new(0.6, 0.85, 0.99),
            control_strength: ThreePointEstimate::new(0.75, 0.85, 0.95),
            primary_loss: ThreePointEstimate::new(4_000.0, 16_000.0, 216_000.0),
            secondary_loss_event_frequency: ThreePointEstimate::new(0.95, 0.97, 0.99),
            secondary_loss_event_magnitude: ThreePointEstimate::new(
                3_350_000.0,
                3_850_000.0,
                8_000_000.0,
            ),
            n_simulations: 100,
        }
    }

    #[test]
    fn test_estimate_lookup() {
        let set = sample_set();
        assert_eq!(set.estimate(RiskFactor::PrimaryLoss).mode, 16_000.0);
        assert_eq!(set.estimate(RiskFactor::ControlStrength).low, 0.75);
        assert_eq!(set.estimates().count(), 6);
    }

    #[test]
    fn test_validate_zero_trials() {
        let mut set = sample_set();
        set.n_simulations = 0;
        assert!(matches!(
            set.validate(),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_reports_first_bad_factor() {
        let mut set = sample_set();
        set.secondary_loss_event_frequency = ThreePointEstimate::new(0.99, 0.97, 0.95);
        match set.validate() {
            Err(EngineError::InvalidRange { factor, .. }) => {
                assert_eq!(factor, RiskFactor::SecondaryLossEventFrequency);
            }
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn test_factor_labels() {
        assert_eq!(
            RiskFactor::ThreatEventFrequency.to_string(),
            "Threat Event Frequency"
        );
        for (i, factor) in RiskFactor::ALL.iter().enumerate() {
            assert_eq!(factor.index(), i);
        }
    }
}
