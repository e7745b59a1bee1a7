//! Reductions over a trial table: summary statistics and the loss exceedance curve.

mod exceedance;
mod statistics;

pub use exceedance::{CURVE_POINTS, loss_exceedance_curve, sample_indices};
pub use statistics::{ColumnStats, round_to, summarize};

use crate::error::Result;
use crate::model::{LossExceedanceCurve, SummaryStatistics, TrialTable};

/// Compute both reductions for a finished run
pub fn aggregate(table: &TrialTable) -> Result<(SummaryStatistics, LossExceedanceCurve)> {
    Ok((summarize(table)?, loss_exceedance_curve(&table.loss_magnitude)?))
}
