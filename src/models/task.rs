//! Task (process) model.
//!
//! A task is one CPU-bound unit of work competing for a single processor.
//! The input record is immutable; algorithms return a [`ScheduledTask`]
//! that carries the input plus every computed timing field.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A task submitted to the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique positive identifier within one simulation run.
    pub id: u32,
    /// Display label. Never used for ordering.
    #[serde(default)]
    pub name: String,
    /// Time unit at which the task becomes runnable.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority (lower value = more important).
    /// Required only by the Priority algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Task {
    /// Creates a task named `P<id>`.
    pub fn new(id: u32, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            name: format!("P{id}"),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Display label, falling back to `P<id>` for unnamed tasks.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            format!("P{}", self.id)
        } else {
            self.name.clone()
        }
    }
}

/// A task together with the fields computed by a simulation.
///
/// Serializes flat: `id, name, arrival, burst, priority, start, finish, ct, tat, wt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// The untouched input record.
    #[serde(flatten)]
    pub task: Task,
    /// Time of first execution.
    pub start: i64,
    /// Time at which remaining work reached zero.
    pub finish: i64,
    /// Completion time (= finish).
    pub ct: i64,
    /// Turnaround time (ct - arrival).
    pub tat: i64,
    /// Waiting time (tat - burst).
    pub wt: i64,
}

impl ScheduledTask {
    /// Attaches start/finish to a task and derives ct, tat and wt.
    ///
    /// Unnamed tasks are reported under their `P<id>` label.
    pub fn new(mut task: Task, start: i64, finish: i64) -> Self {
        if task.name.is_empty() {
            task.name = task.label();
        }
        let tat = finish - task.arrival;
        let wt = tat - task.burst;
        Self {
            task,
            start,
            finish,
            ct: finish,
            tat,
            wt,
        }
    }

    /// Task identifier.
    #[inline]
    pub fn id(&self) -> u32 {
        self.task.id
    }
}
