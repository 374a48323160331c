//! Plain-text rendering of simulation results.
//!
//! Produces the console layout used by interactive front ends: utilization
//! header, a centered per-task table and the timeline.

use std::fmt;

use crate::models::SimulationResult;
use crate::simulation::Algorithm;

const MIN_COLUMN_WIDTH: usize = 5;
const RULE_WIDTH: usize = 60;

/// Text view of a [`SimulationResult`].
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Task;
/// use cpu_sched_sim::report::Report;
/// use cpu_sched_sim::{simulate, Algorithm};
///
/// let result = simulate("fcfs", &[Task::new(1, 0, 3)], None).unwrap();
/// let text = Report::new(&result, Algorithm::Fcfs).to_string();
/// assert!(text.contains("Task 1: Start=0 -> Finish=3, Burst=3"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    result: &'a SimulationResult,
    show_priority: bool,
}

impl<'a> Report<'a> {
    /// Creates a report. The priority column appears only for
    /// [`Algorithm::Priority`].
    pub fn new(result: &'a SimulationResult, algorithm: Algorithm) -> Self {
        Self {
            result,
            show_priority: algorithm == Algorithm::Priority,
        }
    }

    fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["Task", "AT", "BT"];
        if self.show_priority {
            headers.push("PR");
        }
        headers.extend(["CT", "TAT", "WT"]);
        headers
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Simulation Results ===\n")?;
        writeln!(f, "CPU Utilization: {:.2}\n", self.result.cpu_utilization)?;

        let headers = self.headers();
        let widths: Vec<usize> = headers
            .iter()
            .map(|h| h.len().max(MIN_COLUMN_WIDTH))
            .collect();

        let header_line = join_centered(headers.iter().map(|h| h.to_string()), &widths);
        writeln!(f, "{header_line}")?;
        writeln!(f, "{}", "-".repeat(header_line.len()))?;

        for t in &self.result.tasks {
            let mut values = vec![
                t.id().to_string(),
                t.task.arrival.to_string(),
                t.task.burst.to_string(),
            ];
            if self.show_priority {
                values.push(t.task.priority.unwrap_or(0).to_string());
            }
            values.extend([t.ct.to_string(), t.tat.to_string(), t.wt.to_string()]);
            writeln!(f, "{}", join_centered(values.into_iter(), &widths))?;
        }

        writeln!(f, "\nTimeline:")?;
        for s in &self.result.timeline {
            writeln!(
                f,
                "Task {}: Start={} -> Finish={}, Burst={}",
                s.id, s.start, s.finish, s.burst
            )?;
        }

        writeln!(f, "\n{}\n", "=".repeat(RULE_WIDTH))
    }
}

fn join_centered(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:^width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}
