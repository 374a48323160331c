//! Simulation result model.

use serde::{Deserialize, Serialize};

use super::{ScheduledTask, Slice};

/// Unified result of one simulation run.
///
/// Wire shape: `{tasks, avg_tat, avg_wt, cpu_utilization, timeline}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Tasks with computed fields, in the algorithm's working order.
    pub tasks: Vec<ScheduledTask>,
    /// Mean turnaround time, rounded to 2 decimals.
    pub avg_tat: f64,
    /// Mean waiting time, rounded to 2 decimals.
    pub avg_wt: f64,
    /// Busy share of the observed span in percent, rounded to 2 decimals.
    pub cpu_utilization: f64,
    /// Execution slices.
    pub timeline: Vec<Slice>,
}

impl SimulationResult {
    /// Number of simulated tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Finds a task by id.
    pub fn task(&self, id: u32) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Sum of slice lengths recorded for a task.
    pub fn executed_time(&self, id: u32) -> i64 {
        self.timeline
            .iter()
            .filter(|s| s.id == id)
            .map(|s| s.burst)
            .sum()
    }
}
