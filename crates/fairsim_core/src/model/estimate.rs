use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::model::RiskFactor;

/// An uncertain quantity described by minimum, most-likely and maximum values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreePointEstimate {
    pub low: f64,
    pub mode: f64,
    pub high: f64,
}

impl ThreePointEstimate {
    #[must_use]
    pub const fn new(low: f64, mode: f64, high: f64) -> Self {
        Self { low, mode, high }
    }

    /// An estimate with no uncertainty; every draw equals `value`.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self {
            low: value,
            mode: value,
            high: value,
        }
    }

    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// True when the estimate collapses to a single point
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// Mean of the PERT distribution built from this estimate: (low + 4*mode + high) / 6
    #[must_use]
    pub fn pert_mean(&self) -> f64 {
        (self.low + 4.0 * self.mode + self.high) / 6.0
    }

    /// Check `low <= mode <= high` with finite bounds.
    ///
    /// `factor` is only used to label the error.
    pub fn validate(&self, factor: RiskFactor) -> Result<()> {
        let finite = self.low.is_finite() && self.mode.is_finite() && self.high.is_finite();
        if finite && self.low <= self.mode && self.mode <= self.high {
            Ok(())
        } else {
            Err(EngineError::InvalidRange {
                factor,
                low: self.low,
                mode: self.mode,
                high: self.high,
            })
        }
    }
}
