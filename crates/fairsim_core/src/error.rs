use crate::model::RiskFactor;

/// Errors produced by the simulation engine.
///
/// A run either completes or fails with one of these; there are no partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// A three-point estimate is not ordered `low <= mode <= high`, or has a non-finite bound
    #[error("invalid range for {factor}: low={low}, mode={mode}, high={high}")]
    InvalidRange {
        factor: RiskFactor,
        low: f64,
        mode: f64,
        high: f64,
    },

    /// The simulation request itself is unusable (e.g. zero trials)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Sampling or numeric failure while computing trials
    #[error("simulation failed: {0}")]
    SimulationFailure(String),
}

impl EngineError {
    /// Whether the error was caused by the caller's input rather than the engine
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidRange { .. } | EngineError::InvalidConfiguration(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
