//! Integration tests for the FAIR simulation engine
//!
//! Tests are organized by topic:
//! - `sampler` - PERT sampling of three-point estimates
//! - `engine` - Per-trial derivation, batching and determinism
//! - `aggregation` - Summary statistics and the loss exceedance curve
//! - `builder_dsl` - Builder DSL for assembling risk factor sets

mod engine;
