use serde::{Deserialize, Serialize};

/// Derived quantities for a single trial
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Trial {
    pub threat_event_frequency: f64,
    /// 1.0 when sampled threat capability exceeded control strength, otherwise 0.0
    pub vulnerability: f64,
    pub loss_event_frequency: f64,
    pub primary_loss: f64,
    pub secondary_loss_event_frequency: f64,
    pub secondary_loss: f64,
    pub loss_magnitude: f64,
    /// Annualized loss exposure (loss event frequency * loss magnitude)
    pub risk: f64,
}

/// Metrics reported in the summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    LossMagnitude,
    PrimaryLoss,
    SecondaryLoss,
    Risk,
    LossEventFrequency,
    SecondaryLossEventFrequency,
    Vulnerability,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::LossMagnitude,
        Metric::PrimaryLoss,
        Metric::SecondaryLoss,
        Metric::Risk,
        Metric::LossEventFrequency,
        Metric::SecondaryLossEventFrequency,
        Metric::Vulnerability,
    ];

    /// Loss-denominated metrics are reported as whole currency units
    #[must_use]
    pub fn is_loss(&self) -> bool {
        matches!(
            self,
            Metric::LossMagnitude | Metric::PrimaryLoss | Metric::SecondaryLoss | Metric::Risk
        )
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::LossMagnitude => "Loss Magnitude",
            Self::PrimaryLoss => "Primary Loss",
            Self::SecondaryLoss => "Secondary Loss",
            Self::Risk => "Risk",
            Self::LossEventFrequency => "Loss Event Frequency",
            Self::SecondaryLossEventFrequency => "Secondary Loss Event Frequency",
            Self::Vulnerability => "Vulnerability",
        }
    }
}

/// Column-oriented output of one simulation run, one entry per trial in every column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialTable {
    pub threat_event_frequency: Vec<f64>,
    pub vulnerability: Vec<f64>,
    pub loss_event_frequency: Vec<f64>,
    pub primary_loss: Vec<f64>,
    pub secondary_loss_event_frequency: Vec<f64>,
    pub secondary_loss: Vec<f64>,
    pub loss_magnitude: Vec<f64>,
    pub risk: Vec<f64>,
}

impl TrialTable {
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            threat_event_frequency: Vec::with_capacity(n),
            vulnerability: Vec::with_capacity(n),
            loss_event_frequency: Vec::with_capacity(n),
            primary_loss: Vec::with_capacity(n),
            secondary_loss_event_frequency: Vec::with_capacity(n),
            secondary_loss: Vec::with_capacity(n),
            loss_magnitude: Vec::with_capacity(n),
            risk: Vec::with_capacity(n),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loss_magnitude.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loss_magnitude.is_empty()
    }

    pub fn push(&mut self, trial: Trial) {
        self.threat_event_frequency
            .push(trial.threat_event_frequency);
        self.vulnerability.push(trial.vulnerability);
        self.loss_event_frequency.push(trial.loss_event_frequency);
        self.primary_loss.push(trial.primary_loss);
        self.secondary_loss_event_frequency
            .push(trial.secondary_loss_event_frequency);
        self.secondary_loss.push(trial.secondary_loss);
        self.loss_magnitude.push(trial.loss_magnitude);
        self.risk.push(trial.risk);
    }

    /// Move all rows of `other` onto the end of this table
    pub fn append(&mut self, mut other: TrialTable) {
        self.threat_event_frequency
            .append(&mut other.threat_event_frequency);
        self.vulnerability.append(&mut other.vulnerability);
        self.loss_event_frequency
            .append(&mut other.loss_event_frequency);
        self.primary_loss.append(&mut other.primary_loss);
        self.secondary_loss_event_frequency
            .append(&mut other.secondary_loss_event_frequency);
        self.secondary_loss.append(&mut other.secondary_loss);
        self.loss_magnitude.append(&mut other.loss_magnitude);
        self.risk.append(&mut other.risk);
    }

    /// Get a single trial by row index
    #[must_use]
    pub fn row(&self, i: usize) -> Option<Trial> {
        if i >= self.len() {
            return None;
        }
        Some(Trial {
            threat_event_frequency: self.threat_event_frequency[i],
            vulnerability: self.vulnerability[i],
            loss_event_frequency: self.loss_event_frequency[i],
            primary_loss: self.primary_loss[i],
            secondary_loss_event_frequency: self.secondary_loss_event_frequency[i],
            secondary_loss: self.secondary_loss[i],
            loss_magnitude: self.loss_magnitude[i],
            risk: self.risk[i],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Trial> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// The column backing a reported metric
    #[must_use]
    pub fn column(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::LossMagnitude => &self.loss_magnitude,
            Metric::PrimaryLoss => &self.primary_loss,
            Metric::SecondaryLoss => &self.secondary_loss,
            Metric::Risk => &self.risk,
            Metric::LossEventFrequency => &self.loss_event_frequency,
            Metric::SecondaryLossEventFrequency => &self.secondary_loss_event_frequency,
            Metric::Vulnerability => &self.vulnerability,
        }
    }
}

/// Min/max/mean of a loss-denominated metric, truncated to whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossSummary {
    pub minimum: i64,
    pub maximum: i64,
    pub average: i64,
}

/// Min/max/mean of a frequency metric, rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSummary {
    pub minimum: f64,
    pub maximum: f64,
    pub average: f64,
}

/// Fraction of trials in which threat capability exceeded control strength
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilitySummary {
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub loss_magnitude: LossSummary,
    pub primary_loss: LossSummary,
    pub secondary_loss: LossSummary,
    pub risk: LossSummary,
    pub loss_event_frequency: RateSummary,
    pub secondary_loss_event_frequency: RateSummary,
    pub vulnerability: VulnerabilitySummary,
}

/// One point of a loss exceedance curve: the probability of losing at least `loss_exposure`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExceedancePoint {
    pub probability: f64,
    pub loss_exposure: f64,
}

/// Downsampled loss exceedance curve, ordered by descending loss
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LossExceedanceCurve {
    pub points: Vec<ExceedancePoint>,
}

impl LossExceedanceCurve {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExceedancePoint> {
        self.points.iter()
    }
}

/// Aggregated output of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Seed the run was driven from; replaying it reproduces the report
    pub seed: u64,
    pub n_simulations: usize,
    pub statistics: SummaryStatistics,
    pub curve: LossExceedanceCurve,
}
