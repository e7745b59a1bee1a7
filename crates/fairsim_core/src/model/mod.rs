mod estimate;
mod factors;
mod results;

pub use estimate::ThreePointEstimate;
pub use factors::{RiskFactor, RiskFactorSet};
pub use results::{
    ExceedancePoint, LossExceedanceCurve, LossSummary, Metric, RateSummary, SimulationReport,
    SummaryStatistics, Trial, TrialTable, VulnerabilitySummary,
};
