use crate::error::{ApiError, ApiResult};

/// Largest trial count a single request may ask for
pub const MAX_SIMULATIONS: i64 = 100_000;

/// Check the requested trial count before any sampling happens
pub fn validate_n_simulations(n_simulations: i64) -> ApiResult<usize> {
    if n_simulations > MAX_SIMULATIONS {
        return Err(ApiError::validation(
            "n_simulations",
            "n_simulations value exceeds the limit of 100,000.",
        ));
    }

    if n_simulations < 1 {
        return Err(ApiError::validation(
            "n_simulations",
            "n_simulations must be at least 1",
        ));
    }

    usize::try_from(n_simulations).map_err(|_| ApiError::InternalError)
}
