//! Per-metric summary statistics over a trial table.

use crate::error::{EngineError, Result};
use crate::model::{
    LossSummary, Metric, RateSummary, SummaryStatistics, TrialTable, VulnerabilitySummary,
};

/// Round to `decimals` places: scale, round half to even, unscale.
///
/// Matches `numpy.round`, so exact ties like 0.125 go to 0.12.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Minimum, maximum and arithmetic mean of a column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub minimum: f64,
    pub maximum: f64,
    pub mean: f64,
}

impl ColumnStats {
    /// Returns `None` for an empty column
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut minimum = f64::INFINITY;
        let mut maximum = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in values {
            minimum = minimum.min(v);
            maximum = maximum.max(v);
            sum += v;
        }

        Some(Self {
            minimum,
            maximum,
            mean: sum / values.len() as f64,
        })
    }

    /// Whole currency units, truncated toward zero.
    ///
    /// Fails rather than saturating when a value is outside the `i64` range.
    pub fn to_loss_summary(self) -> Result<LossSummary> {
        Ok(LossSummary {
            minimum: truncate_loss(self.minimum)?,
            maximum: truncate_loss(self.maximum)?,
            average: truncate_loss(self.mean)?,
        })
    }

    #[must_use]
    pub fn to_rate_summary(self) -> RateSummary {
        RateSummary {
            minimum: round_to(self.minimum, 2),
            maximum: round_to(self.maximum, 2),
            average: round_to(self.mean, 2),
        }
    }
}

fn truncate_loss(value: f64) -> Result<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(EngineError::SimulationFailure(format!(
            "loss {value} does not fit in whole currency units"
        )))
    }
}

fn column_stats(table: &TrialTable, metric: Metric) -> Result<ColumnStats> {
    ColumnStats::from_values(table.column(metric)).ok_or_else(|| {
        EngineError::InvalidConfiguration(format!(
            "cannot summarize {}: trial table is empty",
            metric.label()
        ))
    })
}

/// Reduce a trial table to the reported statistics
pub fn summarize(table: &TrialTable) -> Result<SummaryStatistics> {
    let loss = |metric| column_stats(table, metric).and_then(ColumnStats::to_loss_summary);
    let rate = |metric| column_stats(table, metric).map(ColumnStats::to_rate_summary);

    Ok(SummaryStatistics {
        loss_magnitude: loss(Metric::LossMagnitude)?,
        primary_loss: loss(Metric::PrimaryLoss)?,
        secondary_loss: loss(Metric::SecondaryLoss)?,
        risk: loss(Metric::Risk)?,
        loss_event_frequency: rate(Metric::LossEventFrequency)?,
        secondary_loss_event_frequency: rate(Metric::SecondaryLossEventFrequency)?,
        vulnerability: VulnerabilitySummary {
            average: round_to(column_stats(table, Metric::Vulnerability)?.mean, 2),
        },
    })
}
