//! FAIR risk quantification library
//!
//! This crate provides a Monte Carlo engine for the FAIR (Factor Analysis of
//! Information Risk) model. Given three-point estimates for
//! - Threat Event Frequency, Threat Capability and Control Strength
//! - Primary Loss
//! - Secondary Loss Event Frequency and Magnitude
//!
//! it samples each factor from a PERT distribution, derives vulnerability, loss
//! event frequency and loss magnitude per trial, and reduces the trials to
//! summary statistics and a loss exceedance curve.
//!
//! # Example
//!
//! ```
//! use fairsim_core::config::RiskFactorSetBuilder;
//! use fairsim_core::simulation::run;
//!
//! let factors = RiskFactorSetBuilder::new()
//!     .trials(1_000)
//!     .threat_event_frequency(0.5, 1.25, 2.0)
//!     .threat_capability(0.6, 0.85, 0.99)
//!     .control_strength(0.75, 0.85, 0.95)
//!     .primary_loss(4_000.0, 16_000.0, 216_000.0)
//!     .secondary_loss_event_frequency(0.95, 0.97, 0.99)
//!     .secondary_loss_event_magnitude(3_350_000.0, 3_850_000.0, 8_000_000.0)
//!     .build()
//!     .unwrap();
//!
//! let report = run(&factors, 42).unwrap();
//! assert_eq!(report.curve.len(), 100);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod distribution;
pub mod error;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::RiskFactorSetBuilder;
pub use error::EngineError;
pub use model::{RiskFactor, RiskFactorSet, SimulationReport, ThreePointEstimate, TrialTable};
