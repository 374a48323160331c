//! Random experiment generation.
//!
//! Produces batches of random task sets and simulates each under one
//! algorithm, for comparing policies over many workloads. Randomness comes
//! only from the caller's RNG, so a seeded RNG gives a reproducible batch.
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::experiment::ExperimentGenerator;
//! use cpu_sched_sim::Algorithm;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let records = ExperimentGenerator::new()
//!     .run_batch(Algorithm::RoundRobin, &mut rng)
//!     .unwrap();
//! assert_eq!(records.len(), 50);
//! ```

use std::ops::RangeInclusive;

use rand::distr::uniform::SampleUniform;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SimulationError;
use crate::models::{SimulationResult, Task};
use crate::simulation::{Algorithm, Simulator, DEFAULT_QUANTUM};

/// Shape of randomly generated workloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Tasks per experiment.
    pub task_count: RangeInclusive<usize>,
    /// Arrival times.
    pub arrival: RangeInclusive<i64>,
    /// Burst times.
    pub burst: RangeInclusive<i64>,
    /// Priorities.
    pub priority: RangeInclusive<i32>,
    /// Experiments per batch.
    pub batch_size: usize,
    /// Round-Robin quantum.
    pub quantum: i64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            task_count: 5..=15,
            arrival: 0..=5,
            burst: 1..=10,
            priority: 1..=5,
            batch_size: 50,
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl ExperimentConfig {
    /// Sets the task count range.
    pub fn with_task_count(mut self, range: RangeInclusive<usize>) -> Self {
        self.task_count = range;
        self
    }

    /// Sets the arrival range.
    pub fn with_arrival(mut self, range: RangeInclusive<i64>) -> Self {
        self.arrival = range;
        self
    }

    /// Sets the burst range.
    pub fn with_burst(mut self, range: RangeInclusive<i64>) -> Self {
        self.burst = range;
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, range: RangeInclusive<i32>) -> Self {
        self.priority = range;
        self
    }

    /// Sets the number of experiments per batch.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }
}

/// One simulated random workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Algorithm used.
    pub algorithm: Algorithm,
    /// Generated input.
    pub tasks: Vec<Task>,
    /// Simulation output.
    pub result: SimulationResult,
}

/// Mean metrics over a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of experiments.
    pub experiments: usize,
    /// Mean of per-experiment average turnaround.
    pub mean_avg_tat: f64,
    /// Mean of per-experiment average waiting time.
    pub mean_avg_wt: f64,
    /// Mean CPU utilization (%).
    pub mean_cpu_utilization: f64,
}

impl BatchSummary {
    /// Summarizes a batch. Returns `None` for an empty batch.
    pub fn from_records(records: &[ExperimentRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let n = records.len() as f64;
        let mean = |f: fn(&SimulationResult) -> f64| -> f64 {
            records.iter().map(|r| f(&r.result)).sum::<f64>() / n
        };
        Some(Self {
            experiments: records.len(),
            mean_avg_tat: mean(|r| r.avg_tat),
            mean_avg_wt: mean(|r| r.avg_wt),
            mean_cpu_utilization: mean(|r| r.cpu_utilization),
        })
    }
}

/// Generates and simulates random workloads.
#[derive(Debug, Clone, Default)]
pub struct ExperimentGenerator {
    config: ExperimentConfig,
    simulator: Simulator,
}

impl ExperimentGenerator {
    /// Creates a generator with the default workload shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workload shape.
    pub fn with_config(mut self, config: ExperimentConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the simulator used for each experiment.
    pub fn with_simulator(mut self, simulator: Simulator) -> Self {
        self.simulator = simulator;
        self
    }

    /// Current workload shape.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Generates one random task set with ids `1..=n` named `P<id>`.
    pub fn generate_tasks<R: Rng>(&self, rng: &mut R) -> Vec<Task> {
        let n = sample(rng, &self.config.task_count);
        (1..=n)
            .map(|i| {
                let arrival = sample(rng, &self.config.arrival);
                let burst = sample(rng, &self.config.burst);
                let priority = sample(rng, &self.config.priority);
                Task::new(i as u32, arrival, burst).with_priority(priority)
            })
            .collect()
    }

    /// Generates and simulates one workload.
    ///
    /// # Errors
    /// Propagates simulation errors, e.g. when the configured ranges
    /// produce invalid tasks.
    pub fn run_one<R: Rng>(
        &self,
        algorithm: Algorithm,
        rng: &mut R,
    ) -> Result<ExperimentRecord, SimulationError> {
        let tasks = self.generate_tasks(rng);
        let result = self
            .simulator
            .simulate(algorithm, &tasks, Some(self.config.quantum))?;
        Ok(ExperimentRecord {
            algorithm,
            tasks,
            result,
        })
    }

    /// Runs a full batch under one algorithm.
    ///
    /// # Errors
    /// Stops at the first failing experiment.
    pub fn run_batch<R: Rng>(
        &self,
        algorithm: Algorithm,
        rng: &mut R,
    ) -> Result<Vec<ExperimentRecord>, SimulationError> {
        info!(
            algorithm = algorithm.name(),
            batch_size = self.config.batch_size,
            "generating experiment batch"
        );
        (0..self.config.batch_size)
            .map(|_| self.run_one(algorithm, rng))
            .collect()
    }
}

fn sample<R, T>(rng: &mut R, range: &RangeInclusive<T>) -> T
where
    R: Rng,
    T: SampleUniform + PartialOrd + Copy,
{
    if range.is_empty() {
        *range.start()
    } else {
        rng.random_range(range.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_tasks_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = ExperimentGenerator::new();
        for _ in 0..20 {
            let tasks = generator.generate_tasks(&mut rng);
            assert!((5..=15).contains(&tasks.len()));
            for (i, t) in tasks.iter().enumerate() {
                assert_eq!(t.id as usize, i + 1);
                assert_eq!(t.name, format!("P{}", i + 1));
                assert!((0..=5).contains(&t.arrival));
                assert!((1..=10).contains(&t.burst));
                assert!(matches!(t.priority, Some(1..=5)));
            }
        }
    }

    #[test]
    fn test_batch_is_reproducible() {
        let generator =
            ExperimentGenerator::new().with_config(ExperimentConfig::default().with_batch_size(5));
        let a = generator
            .run_batch(Algorithm::Srtf, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let b = generator
            .run_batch(Algorithm::Srtf, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(a.len(), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_algorithm_runs() {
        let mut rng = StdRng::seed_from_u64(11);
        let generator =
            ExperimentGenerator::new().with_config(ExperimentConfig::default().with_batch_size(3));
        for algorithm in Algorithm::ALL {
            let records = generator.run_batch(algorithm, &mut rng).unwrap();
            assert!(records.iter().all(|r| r.algorithm == algorithm));
            assert!(records
                .iter()
                .all(|r| r.result.task_count() == r.tasks.len()));
        }
    }

    #[test]
    fn test_invalid_config_surfaces_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator =
            ExperimentGenerator::new().with_config(ExperimentConfig::default().with_quantum(0));
        assert_eq!(
            generator.run_one(Algorithm::RoundRobin, &mut rng).unwrap_err(),
            SimulationError::InvalidQuantum(Some(0))
        );
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(9);
        let config = ExperimentConfig::default()
            .with_task_count(2..=2)
            .with_arrival(3..=3)
            .with_burst(4..=4);
        let tasks = ExperimentGenerator::new()
            .with_config(config)
            .generate_tasks(&mut rng);
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.arrival == 3 && t.burst == 4));
    }

    #[test]
    fn test_summary() {
        let mut rng = StdRng::seed_from_u64(5);
        let generator =
            ExperimentGenerator::new().with_config(ExperimentConfig::default().with_batch_size(4));
        let records = generator.run_batch(Algorithm::Fcfs, &mut rng).unwrap();
        let summary = BatchSummary::from_records(&records).unwrap();
        assert_eq!(summary.experiments, 4);
        assert!(summary.mean_cpu_utilization > 0.0 && summary.mean_cpu_utilization <= 100.0);
        assert!(BatchSummary::from_records(&[]).is_none());
    }
}
