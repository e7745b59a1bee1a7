//! Input assembly
//!
//! [`RiskFactorSet`](crate::model::RiskFactorSet) can be built directly as a struct
//! literal, or through the builder DSL:
//!
//! ```ignore
//! use fairsim_core::config::RiskFactorSetBuilder;
//! use fairsim_core::model::RiskFactor;
//!
//! let factors = RiskFactorSetBuilder::new()
//!     .trials(1_000)
//!     .constant(RiskFactor::ThreatEventFrequency, 1.0)
//!     .threat_capability(0.6, 0.85, 0.99)
//!     .control_strength(0.75, 0.85, 0.95)
//!     .primary_loss(4_000.0, 16_000.0, 216_000.0)
//!     .constant(RiskFactor::SecondaryLossEventFrequency, 0.0)
//!     .constant(RiskFactor::SecondaryLossEventMagnitude, 0.0)
//!     .build()?;
//! ```

mod builder;

pub use builder::{DEFAULT_TRIALS, RiskFactorSetBuilder};
