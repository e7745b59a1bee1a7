//! Three-point (PERT) sampling for FAIR estimates.
//!
//! A non-degenerate estimate is sampled from a Beta distribution rescaled to
//! `[low, high]`, with shape parameters chosen so the density peaks at `mode`:
//!
//! ```text
//! alpha = 1 + 4 * (mode - low) / (high - low)
//! beta  = 1 + 4 * (high - mode) / (high - low)
//! x     = low + Beta(alpha, beta) * (high - low)
//! ```

use rand::Rng;
use rand_distr::{Beta, Distribution};

use crate::error::{EngineError, Result};
use crate::model::{RiskFactor, ThreePointEstimate};

/// Weight given to the mode when deriving the Beta shape parameters
pub const PERT_GAMMA: f64 = 4.0;

/// Draws values for a single three-point estimate.
///
/// Construction validates the estimate; sampling itself cannot fail.
#[derive(Debug, Clone)]
pub enum ThreePointSampler {
    /// `low == mode == high`; every draw is this value and no randomness is consumed
    Constant(f64),
    Pert {
        low: f64,
        high: f64,
        beta: Beta<f64>,
    },
}

impl ThreePointSampler {
    /// Build a sampler for `estimate`, labelling errors with `factor`
    pub fn new(factor: RiskFactor, estimate: &ThreePointEstimate) -> Result<Self> {
        estimate.validate(factor)?;

        if estimate.is_degenerate() {
            return Ok(ThreePointSampler::Constant(estimate.low));
        }

        let range = estimate.range();
        let alpha = 1.0 + PERT_GAMMA * (estimate.mode - estimate.low) / range;
        let beta_shape = 1.0 + PERT_GAMMA * (estimate.high - estimate.mode) / range;

        let beta = Beta::new(alpha, beta_shape).map_err(|e| {
            EngineError::SimulationFailure(format!(
                "cannot build PERT distribution for {factor} (alpha={alpha}, beta={beta_shape}): {e}"
            ))
        })?;

        Ok(ThreePointSampler::Pert {
            low: estimate.low,
            high: estimate.high,
            beta,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            ThreePointSampler::Constant(value) => *value,
            ThreePointSampler::Pert { low, high, beta } => {
                // Rescaling can overshoot `high` by an ulp
                (low + beta.sample(rng) * (high - low)).clamp(*low, *high)
            }
        }
    }

    /// Fill `out` with independent draws
    pub fn fill<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [f64]) {
        match self {
            ThreePointSampler::Constant(value) => out.fill(*value),
            ThreePointSampler::Pert { .. } => {
                for slot in out.iter_mut() {
                    *slot = self.sample(rng);
                }
            }
        }
    }

    /// Draw `n` independent values
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        let mut out = vec![0.0; n];
        self.fill(rng, &mut out);
        out
    }
}
