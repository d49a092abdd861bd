//! Synthetic workload generation.
//!
//! Produces reproducible process sets for experiments. The engine does
//! not depend on this module; it only consumes the resulting
//! [`ProcessSpec`]s.
//!
//! # Patterns
//!
//! | Attribute | Pattern | Distribution |
//! |-----------|---------|--------------|
//! | Arrival | Sequential | process i arrives at i |
//! | Arrival | Random | uniform in [0, max(1, n/2)], sorted |
//! | Arrival | Bursty | clusters of max(1, n/10), jitter up to half a cluster |
//! | Burst | Fixed | always 5 |
//! | Burst | Random | uniform in [1, 15] |
//! | Burst | Heavy | exponential with mean 5, floored at 1 |
//! | Priority | Uniform | always 5 |
//! | Priority | Random | uniform in [1, 10] |
//! | Priority | Skewed | weighted over {1, 2, 3, 8, 9, 10} |

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{ProcessId, ProcessSpec};

/// Default seed, so unconfigured experiments are reproducible.
pub const DEFAULT_SEED: u64 = 42;

const FIXED_BURST: i64 = 5;
const MAX_RANDOM_BURST: i64 = 15;
const HEAVY_BURST_MEAN: f64 = 5.0;
const UNIFORM_PRIORITY: i32 = 5;
const SKEWED_PRIORITIES: [(i32, f64); 6] = [
    (1, 0.2),
    (2, 0.2),
    (3, 0.2),
    (8, 0.15),
    (9, 0.15),
    (10, 0.1),
];

/// How arrival times are spread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalPattern {
    /// Process i arrives at time i (controlled load).
    #[default]
    Sequential,
    /// Arrival times scattered uniformly.
    Random,
    /// Arrivals clustered into bursts.
    Bursty,
}

/// How burst times are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BurstPattern {
    /// Every process has the same burst.
    Fixed,
    /// Uniformly random bursts.
    #[default]
    Random,
    /// Heavy-tailed: many short jobs, few long ones.
    Heavy,
}

/// How priorities are assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityPattern {
    /// All processes share one priority.
    Uniform,
    /// Uniformly random priorities.
    #[default]
    Random,
    /// Mostly low priorities with a few urgent processes.
    Skewed,
}

/// Workload generator configuration.
///
/// # Example
///
/// ```
/// use u_cpusched::workload::{ArrivalPattern, WorkloadConfig};
///
/// let specs = WorkloadConfig::new(100)
///     .with_arrival(ArrivalPattern::Bursty)
///     .generate();
/// assert_eq!(specs.len(), 100);
/// assert_eq!(specs[0].id, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes to generate.
    pub count: usize,
    /// RNG seed.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Arrival time pattern.
    #[serde(default)]
    pub arrival: ArrivalPattern,
    /// Burst time pattern.
    #[serde(default)]
    pub burst: BurstPattern,
    /// Priority pattern.
    #[serde(default)]
    pub priority: PriorityPattern,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default patterns.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: DEFAULT_SEED,
            arrival: ArrivalPattern::default(),
            burst: BurstPattern::default(),
            priority: PriorityPattern::default(),
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the arrival pattern.
    pub fn with_arrival(mut self, pattern: ArrivalPattern) -> Self {
        self.arrival = pattern;
        self
    }

    /// Sets the burst pattern.
    pub fn with_burst(mut self, pattern: BurstPattern) -> Self {
        self.burst = pattern;
        self
    }

    /// Sets the priority pattern.
    pub fn with_priority(mut self, pattern: PriorityPattern) -> Self {
        self.priority = pattern;
        self
    }

    /// Generates the process specs. IDs run from 1 to `count`.
    ///
    /// The same config always yields the same workload, and every
    /// generated spec passes validation.
    pub fn generate(&self) -> Vec<ProcessSpec> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let n = self.count;

        let arrivals = self.arrival_times(&mut rng);
        let bursts: Vec<i64> = (0..n).map(|_| self.burst_time(&mut rng)).collect();
        let priorities: Vec<i32> = (0..n).map(|_| self.priority_value(&mut rng)).collect();

        debug!(
            "generated {} processes (seed={}, arrival={:?}, burst={:?}, priority={:?})",
            n, self.seed, self.arrival, self.burst, self.priority
        );

        (0..n)
            .map(|i| {
                ProcessSpec::new(i as ProcessId + 1, arrivals[i], bursts[i])
                    .with_priority(priorities[i])
            })
            .collect()
    }

    fn arrival_times<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        let n = self.count;
        match self.arrival {
            ArrivalPattern::Sequential => (0..n as i64).collect(),
            ArrivalPattern::Random => {
                let max_arrival = (n as i64 / 2).max(1);
                let mut times: Vec<i64> =
                    (0..n).map(|_| rng.random_range(0..=max_arrival)).collect();
                times.sort_unstable();
                times
            }
            ArrivalPattern::Bursty => {
                let cluster = (n / 10).max(1);
                let jitter = (cluster / 2) as i64;
                (0..n)
                    .map(|i| ((i / cluster) * cluster) as i64 + rng.random_range(0..=jitter))
                    .collect()
            }
        }
    }

    fn burst_time<R: Rng>(&self, rng: &mut R) -> i64 {
        match self.burst {
            BurstPattern::Fixed => FIXED_BURST,
            BurstPattern::Random => rng.random_range(1..=MAX_RANDOM_BURST),
            BurstPattern::Heavy => {
                // Inverse CDF of the exponential distribution
                let u: f64 = rng.random();
                let sample = -HEAVY_BURST_MEAN * (1.0 - u).ln();
                (sample as i64).max(1)
            }
        }
    }

    fn priority_value<R: Rng>(&self, rng: &mut R) -> i32 {
        match self.priority {
            PriorityPattern::Uniform => UNIFORM_PRIORITY,
            PriorityPattern::Random => rng.random_range(1..=10),
            PriorityPattern::Skewed => SKEWED_PRIORITIES
                .choose_weighted(rng, |&(_, weight)| weight)
                .map(|&(priority, _)| priority)
                .unwrap_or(UNIFORM_PRIORITY),
        }
    }
}
