//! Loss exceedance curve construction.
//!
//! Losses are sorted descending so the k-th largest loss (1-indexed) is exceeded or
//! matched with empirical probability `k / n`. The full curve is then thinned to
//! [`CURVE_POINTS`] evenly spaced positions so its size doesn't grow with `n`.

use crate::analysis::round_to;
use crate::error::{EngineError, Result};
use crate::model::{ExceedancePoint, LossExceedanceCurve};

/// Number of points in every emitted curve
pub const CURVE_POINTS: usize = 100;

/// Evenly spaced positions over `0..n`, first and last inclusive.
///
/// Each position is `j * step` with a floating-point `step = (n - 1) / 99`, truncated
/// toward zero, and the last one is pinned to `n - 1`. This reproduces
/// `numpy.linspace(0, n - 1, 100, dtype=int)`, which can land one below the exact
/// floor of `j * (n - 1) / 99` (e.g. n = 28, j = 55 gives 14, not 15).
///
/// For `n < CURVE_POINTS` the same index appears more than once.
#[must_use]
pub fn sample_indices(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let last = n - 1;
    let step = last as f64 / (CURVE_POINTS - 1) as f64;
    (0..CURVE_POINTS)
        .map(|j| {
            if j == CURVE_POINTS - 1 {
                last
            } else {
                ((j as f64 * step) as usize).min(last)
            }
        })
        .collect()
}

/// Build the downsampled exceedance curve for a set of per-trial losses
pub fn loss_exceedance_curve(losses: &[f64]) -> Result<LossExceedanceCurve> {
    if losses.is_empty() {
        return Err(EngineError::InvalidConfiguration(
            "cannot build a loss exceedance curve from zero trials".to_string(),
        ));
    }

    let mut sorted = losses.to_vec();
    sorted.sort_unstable_by(|a, b| b.total_cmp(a));

    let n = sorted.len() as f64;
    let points = sample_indices(sorted.len())
        .into_iter()
        .map(|idx| ExceedancePoint {
            probability: round_to((idx + 1) as f64 / n, 2),
            loss_exposure: round_to(sorted[idx], 2),
        })
        .collect();

    Ok(LossExceedanceCurve { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_indices_endpoints() {
        let idx = sample_indices(100_000);
        assert_eq!(idx.len(), CURVE_POINTS);
        assert_eq!(idx[0], 0);
        assert_eq!(idx[99], 99_999);
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_indices_exact_fit() {
        let idx = sample_indices(100);
        assert_eq!(idx, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_sample_indices_truncate_float_step() {
        // 55 * (27 / 99) is just below 15 in f64
        let idx = sample_indices(28);
        assert_eq!(idx[55], 14);
        assert_eq!(idx[99], 27);

        let idx = sample_indices(109);
        assert_eq!(idx.len(), CURVE_POINTS);
        assert!(idx.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(idx[99], 108);
    }

    #[test]
    fn test_sample_indices_small_n_keeps_duplicates() {
        let idx = sample_indices(10);
        assert_eq!(idx.len(), CURVE_POINTS);
        assert_eq!(idx[0], 0);
        assert_eq!(idx[99], 9);
        // 9/99 * 10 = 0.909..., still index 0
        assert_eq!(idx[10], 0);
        assert_eq!(idx[11], 1);
        assert!(idx.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(sample_indices(1), vec![0; CURVE_POINTS]);
    }

    #[test]
    fn test_curve_descending() {
        let losses: Vec<f64> = (1..=1_000).map(|v| v as f64).collect();
        let curve = loss_exceedance_curve(&losses).unwrap();

        assert_eq!(curve.len(), CURVE_POINTS);
        assert_eq!(curve.points[0].loss_exposure, 1_000.0);
        assert_eq!(curve.points[0].probability, 0.0);
        assert_eq!(curve.points[99].loss_exposure, 1.0);
        assert_eq!(curve.points[99].probability, 1.0);
        assert!(
            curve
                .points
                .windows(2)
                .all(|w| w[0].loss_exposure >= w[1].loss_exposure
                    && w[0].probability <= w[1].probability)
        );
    }

    #[test]
    fn test_curve_probabilities() {
        // n = 4: indices are 0, 0, ..., 3; probability of the largest loss is 1/4
        let curve = loss_exceedance_curve(&[10.0, 40.0, 20.0, 30.0]).unwrap();
        assert_eq!(curve.points[0].probability, 0.25);
        assert_eq!(curve.points[0].loss_exposure, 40.0);
        assert_eq!(curve.points[99].probability, 1.0);
        assert_eq!(curve.points[99].loss_exposure, 10.0);
    }

    #[test]
    fn test_curve_rounds_losses() {
        let curve = loss_exceedance_curve(&[1_234.5678]).unwrap();
        assert!(curve.iter().all(|p| p.loss_exposure == 1_234.57));
    }

    #[test]
    fn test_curve_ties_round_to_even() {
        // Largest of 8 losses has probability 1/8 = 0.125
        let losses: Vec<f64> = (1..=8).map(|v| v as f64 * 0.125).collect();
        let curve = loss_exceedance_curve(&losses).unwrap();
        assert_eq!(curve.points[0].probability, 0.12);
        assert_eq!(curve.points[0].loss_exposure, 1.0);
        // 3/8 rounds up to the even digit
        assert_eq!(curve.points[99].probability, 1.0);
        assert_eq!(round_to(0.375, 2), 0.38);
    }

    #[test]
    fn test_curve_empty() {
        assert!(loss_exceedance_curve(&[]).is_err());
    }
}
