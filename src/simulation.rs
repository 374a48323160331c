//! Simulation facade.
//!
//! Resolves an algorithm name, validates the request, runs the algorithm and
//! folds the schedule into a [`SimulationResult`]. Every call is independent:
//! the simulator holds only configuration, never run state, so one instance
//! can serve concurrent callers.
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::Task;
//! use cpu_sched_sim::simulate;
//!
//! let tasks = vec![Task::new(1, 0, 8), Task::new(2, 1, 4)];
//! let result = simulate("srtf", &tasks, None).unwrap();
//! assert_eq!(result.task(2).unwrap().finish, 5);
//! assert_eq!(result.task(1).unwrap().finish, 12);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SimulationError;
use crate::models::{SimulationResult, Task, TimelineMode};
use crate::scheduler::{self, metrics};
use crate::validation::{time_horizon, validate_tasks, ValidationError, ValidationErrorKind};

/// Default Round-Robin quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// The fixed set of supported scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "fcfs")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "sjf")]
    Sjf,
    /// Shortest-Remaining-Time-First, preemptive.
    #[serde(rename = "srtf")]
    Srtf,
    /// Round-Robin.
    #[serde(rename = "rr")]
    RoundRobin,
    /// Static priority, non-preemptive.
    #[serde(rename = "priority")]
    Priority,
}

impl Algorithm {
    /// All algorithms in canonical order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Wire name (`fcfs`, `sjf`, `srtf`, `rr`, `priority`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin => "rr",
            Self::Priority => "priority",
        }
    }

    /// The algorithm after this one in canonical order, wrapping around.
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Whether the algorithm consumes a quantum.
    pub fn uses_quantum(self) -> bool {
        self == Self::RoundRobin
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| SimulationError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Simulator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Quantum used when a Round-Robin call omits one.
    /// `None` makes the quantum mandatory.
    pub default_quantum: Option<i64>,
    /// Timeline shape for SRTF.
    pub srtf_timeline: TimelineMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_quantum: Some(DEFAULT_QUANTUM),
            srtf_timeline: TimelineMode::Collapsed,
        }
    }
}

impl SimulationConfig {
    /// Sets the fallback Round-Robin quantum.
    pub fn with_default_quantum(mut self, quantum: Option<i64>) -> Self {
        self.default_quantum = quantum;
        self
    }

    /// Sets the SRTF timeline shape.
    pub fn with_srtf_timeline(mut self, mode: TimelineMode) -> Self {
        self.srtf_timeline = mode;
        self
    }
}

/// A simulation request as received over the wire.
///
/// `{"algorithm": "rr", "tasks": [...], "quantum": 2}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Algorithm name.
    pub algorithm: String,
    /// Tasks to simulate.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Round-Robin quantum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(algorithm: Algorithm, tasks: Vec<Task>) -> Self {
        Self {
            algorithm: algorithm.name().to_string(),
            tasks,
            quantum: None,
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Parses a JSON request.
    ///
    /// # Errors
    /// Well-formed JSON with missing or mistyped fields yields
    /// [`SimulationError::MalformedTask`]; unparsable input yields
    /// [`SimulationError::Simulation`].
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json).map_err(|e| {
            if e.is_data() {
                SimulationError::MalformedTask(vec![ValidationError::new(
                    ValidationErrorKind::InvalidField,
                    e.to_string(),
                )])
            } else {
                SimulationError::Simulation(e.to_string())
            }
        })
    }
}

/// Runs simulations under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `tasks` under `algorithm`.
    ///
    /// `quantum` is routed only to Round-Robin; other algorithms ignore it.
    ///
    /// # Errors
    /// Returns a [`SimulationError`] and no result if the input is rejected.
    pub fn simulate(
        &self,
        algorithm: Algorithm,
        tasks: &[Task],
        quantum: Option<i64>,
    ) -> Result<SimulationResult, SimulationError> {
        let quantum = if algorithm.uses_quantum() {
            quantum.or(self.config.default_quantum)
        } else {
            None
        };

        info!(
            algorithm = algorithm.name(),
            task_count = tasks.len(),
            quantum = ?quantum,
            "running simulation"
        );

        if let Err(errors) = validate_tasks(tasks, algorithm, quantum) {
            warn!(
                algorithm = algorithm.name(),
                error_count = errors.len(),
                "simulation request rejected"
            );
            return Err(SimulationError::from_validation(errors, quantum));
        }
        if time_horizon(tasks).is_none() {
            return Err(SimulationError::Simulation(
                "time horizon exceeds the representable range".to_string(),
            ));
        }

        let schedule = match algorithm {
            Algorithm::Fcfs => scheduler::fcfs(tasks),
            Algorithm::Sjf => scheduler::sjf(tasks),
            Algorithm::Srtf => scheduler::srtf(tasks, self.config.srtf_timeline),
            Algorithm::RoundRobin => match quantum {
                Some(q) => scheduler::round_robin(tasks, q),
                None => return Err(SimulationError::InvalidQuantum(None)),
            },
            Algorithm::Priority => scheduler::priority(tasks),
        };

        metrics::calculate(schedule)
    }

    /// Simulates under an algorithm given by name.
    ///
    /// # Errors
    /// [`SimulationError::UnsupportedAlgorithm`] for unknown names, otherwise
    /// as [`Simulator::simulate`].
    pub fn simulate_named(
        &self,
        algorithm: &str,
        tasks: &[Task],
        quantum: Option<i64>,
    ) -> Result<SimulationResult, SimulationError> {
        let algorithm: Algorithm = algorithm.parse()?;
        self.simulate(algorithm, tasks, quantum)
    }

    /// Runs a wire request.
    pub fn run_request(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        self.simulate_named(&request.algorithm, &request.tasks, request.quantum)
    }
}

/// Simulates with the default configuration.
///
/// See [`Simulator::simulate_named`].
pub fn simulate(
    algorithm: &str,
    tasks: &[Task],
    quantum: Option<i64>,
) -> Result<SimulationResult, SimulationError> {
    Simulator::new().simulate_named(algorithm, tasks, quantum)
}
