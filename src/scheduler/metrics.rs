//! Schedule metrics.
//!
//! Folds a finished schedule into the unified simulation result.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | CT | finish |
//! | TAT | CT - arrival |
//! | WT | TAT - burst |
//! | Avg TAT / Avg WT | Arithmetic means, 2 decimals |
//! | CPU utilization | 100 · Σburst / (max finish - min arrival), 2 decimals |
//!
//! A zero-length observed span counts as 100 % utilization.

use crate::error::SimulationError;
use crate::models::{Schedule, SimulationResult};

/// Computes aggregate statistics for a finished schedule.
///
/// # Errors
/// Returns [`SimulationError::EmptyTaskSet`] if the schedule has no tasks,
/// and [`SimulationError::Simulation`] if a time total overflows `i64`.
pub fn calculate(schedule: Schedule) -> Result<SimulationResult, SimulationError> {
    let Schedule { tasks, timeline } = schedule;
    if tasks.is_empty() {
        return Err(SimulationError::EmptyTaskSet);
    }

    let n = tasks.len() as f64;
    let total_tat = checked_total(tasks.iter().map(|t| t.tat), "turnaround")?;
    let total_wt = checked_total(tasks.iter().map(|t| t.wt), "waiting")?;
    let total_burst = checked_total(tasks.iter().map(|t| t.task.burst), "burst")?;

    let first_arrival = tasks.iter().map(|t| t.task.arrival).min().unwrap_or(0);
    let last_finish = tasks.iter().map(|t| t.finish).max().unwrap_or(0);
    let utilization = if last_finish > first_arrival {
        total_burst as f64 / (last_finish - first_arrival) as f64
    } else {
        1.0
    };

    Ok(SimulationResult {
        tasks,
        avg_tat: round2(total_tat as f64 / n),
        avg_wt: round2(total_wt as f64 / n),
        cpu_utilization: round2(utilization * 100.0),
        timeline,
    })
}

fn checked_total(
    mut values: impl Iterator<Item = i64>,
    metric: &str,
) -> Result<i64, SimulationError> {
    values
        .try_fold(0i64, i64::checked_add)
        .ok_or_else(|| SimulationError::Simulation(format!("total {metric} time overflows i64")))
}

/// Rounds to 2 decimals.
///
/// Goes through decimal formatting, which rounds the exact value of the
/// double (ties to even), so `0.025` becomes `0.03` and `1.025` becomes `1.02`.
pub(crate) fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
