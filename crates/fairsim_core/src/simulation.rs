use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::analysis::aggregate;
use crate::distribution::ThreePointSampler;
use crate::error::{EngineError, Result};
use crate::model::{RiskFactor, RiskFactorSet, SimulationReport, Trial, TrialTable};

/// Trials generated from a single batch seed
pub const BATCH_SIZE: usize = 4096;

/// How batches are scheduled. Both produce identical tables for the same random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Sequential,
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Default for Execution {
    fn default() -> Self {
        #[cfg(feature = "parallel")]
        {
            Execution::Parallel
        }
        #[cfg(not(feature = "parallel"))]
        {
            Execution::Sequential
        }
    }
}

/// Raw per-trial samples, one per risk factor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FactorDraws {
    pub threat_event_frequency: f64,
    pub threat_capability: f64,
    pub control_strength: f64,
    pub primary_loss: f64,
    pub secondary_loss_event_frequency: f64,
    pub secondary_loss_event_magnitude: f64,
}

/// Apply the FAIR derivation to one trial's samples
#[must_use]
pub fn derive_trial(draws: FactorDraws) -> Trial {
    let vulnerability = if draws.threat_capability > draws.control_strength {
        1.0
    } else {
        0.0
    };
    let loss_event_frequency = draws.threat_event_frequency * vulnerability;
    let primary_loss = draws.primary_loss;
    let secondary_loss =
        draws.secondary_loss_event_frequency * draws.secondary_loss_event_magnitude;
    let loss_magnitude = primary_loss + secondary_loss;

    Trial {
        threat_event_frequency: draws.threat_event_frequency,
        vulnerability,
        loss_event_frequency,
        primary_loss,
        secondary_loss_event_frequency: draws.secondary_loss_event_frequency,
        secondary_loss,
        loss_magnitude,
        risk: loss_event_frequency * loss_magnitude,
    }
}

/// One validated sampler per factor
#[derive(Debug, Clone)]
struct FactorSamplers {
    samplers: [ThreePointSampler; 6],
}

impl FactorSamplers {
    fn new(factors: &RiskFactorSet) -> Result<Self> {
        let [tef, tc, cs, plm, slef, slm] = RiskFactor::ALL;
        Ok(Self {
            samplers: [
                ThreePointSampler::new(tef, factors.estimate(tef))?,
                ThreePointSampler::new(tc, factors.estimate(tc))?,
                ThreePointSampler::new(cs, factors.estimate(cs))?,
                ThreePointSampler::new(plm, factors.estimate(plm))?,
                ThreePointSampler::new(slef, factors.estimate(slef))?,
                ThreePointSampler::new(slm, factors.estimate(slm))?,
            ],
        })
    }

    fn simulate_batch(&self, seed: u64, len: usize) -> Result<TrialTable> {
        let mut rng = SmallRng::seed_from_u64(seed);

        // Column-at-a-time, in RiskFactor::ALL order
        let [tef, tc, cs, plm, slef, slm] = self
            .samplers
            .each_ref()
            .map(|s| s.sample_n(&mut rng, len));

        let mut table = TrialTable::with_capacity(len);
        for i in 0..len {
            let trial = derive_trial(FactorDraws {
                threat_event_frequency: tef[i],
                threat_capability: tc[i],
                control_strength: cs[i],
                primary_loss: plm[i],
                secondary_loss_event_frequency: slef[i],
                secondary_loss_event_magnitude: slm[i],
            });

            if !trial.loss_magnitude.is_finite() || !trial.risk.is_finite() {
                return Err(EngineError::SimulationFailure(format!(
                    "non-finite loss in trial (loss_magnitude={}, risk={})",
                    trial.loss_magnitude, trial.risk
                )));
            }

            table.push(trial);
        }

        Ok(table)
    }
}

fn batch_len(batch: usize, n: usize) -> usize {
    (n - batch * BATCH_SIZE).min(BATCH_SIZE)
}

/// Run all trials for `factors`, drawing batch seeds from `rng`.
///
/// Fails without sampling anything if the inputs don't validate.
pub fn simulate<R: Rng + ?Sized>(factors: &RiskFactorSet, rng: &mut R) -> Result<TrialTable> {
    simulate_with_execution(factors, rng, Execution::default())
}

pub fn simulate_with_execution<R: Rng + ?Sized>(
    factors: &RiskFactorSet,
    rng: &mut R,
    execution: Execution,
) -> Result<TrialTable> {
    factors.validate()?;
    let samplers = FactorSamplers::new(factors)?;

    let n = factors.n_simulations;
    let num_batches = n.div_ceil(BATCH_SIZE);
    let seeds: Vec<u64> = (0..num_batches).map(|_| rng.next_u64()).collect();

    tracing::debug!(
        n_simulations = n,
        batches = num_batches,
        ?execution,
        "running FAIR simulation"
    );

    let batches: Vec<TrialTable> = match execution {
        Execution::Sequential => seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| samplers.simulate_batch(*seed, batch_len(i, n)))
            .collect::<Result<_>>()?,
        #[cfg(feature = "parallel")]
        Execution::Parallel => seeds
            .par_iter()
            .enumerate()
            .map(|(i, seed)| samplers.simulate_batch(*seed, batch_len(i, n)))
            .collect::<Result<_>>()?,
    };

    let mut table = TrialTable::with_capacity(n);
    for batch in batches {
        table.append(batch);
    }

    Ok(table)
}

/// Run all trials from a fixed seed
pub fn simulate_seeded(factors: &RiskFactorSet, seed: u64) -> Result<TrialTable> {
    let mut rng = SmallRng::seed_from_u64(seed);
    simulate(factors, &mut rng)
}

/// Simulate and aggregate in one step
pub fn run(factors: &RiskFactorSet, seed: u64) -> Result<SimulationReport> {
    let table = simulate_seeded(factors, seed)?;
    let (statistics, curve) = aggregate(&table)?;

    tracing::debug!(
        seed,
        n_simulations = table.len(),
        mean_loss = statistics.loss_magnitude.average,
        "FAIR simulation complete"
    );

    Ok(SimulationReport {
        seed,
        n_simulations: table.len(),
        statistics,
        curve,
    })
}
