//! Schedule (algorithm output) model.
//!
//! A schedule is the raw product of one scheduling algorithm: the finish-time
//! assignment for every task plus the execution timeline. Aggregate metrics
//! are folded in afterwards by [`crate::scheduler::metrics`].

use serde::{Deserialize, Serialize};

use super::ScheduledTask;

/// One interval during which a single task occupied the CPU.
///
/// `burst` is the length of this slice, not the task's total burst.
/// The name is kept for compatibility with the established result shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Task identifier.
    pub id: u32,
    /// Slice start time.
    pub start: i64,
    /// Slice end time (exclusive).
    pub finish: i64,
    /// Slice length.
    pub burst: i64,
    /// Task priority, reported only by the Priority algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Slice {
    /// Creates a slice covering `[start, finish)`.
    pub fn new(id: u32, start: i64, finish: i64) -> Self {
        Self {
            id,
            start,
            finish,
            burst: finish - start,
            priority: None,
        }
    }

    /// Creates a slice whose reported length differs from its span.
    ///
    /// Used by collapsed timelines, where a preempted task's interval
    /// covers time spent waiting.
    pub fn spanning(id: u32, start: i64, finish: i64, burst: i64) -> Self {
        Self {
            id,
            start,
            finish,
            burst,
            priority: None,
        }
    }

    /// Attaches the task priority.
    pub fn with_priority(mut self, priority: Option<i32>) -> Self {
        self.priority = priority;
        self
    }
}

/// How preemptive shortest-remaining-time timelines are recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineMode {
    /// One slice per task spanning first dispatch to completion.
    /// The slice length reports the task's full burst.
    #[default]
    Collapsed,
    /// One slice per contiguous run segment, as Round-Robin reports.
    Segmented,
}

/// Output of a scheduling algorithm before metrics are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Tasks in the algorithm's working order.
    pub tasks: Vec<ScheduledTask>,
    /// Execution slices in emission order.
    pub timeline: Vec<Slice>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest finish time across all tasks.
    pub fn makespan(&self) -> i64 {
        self.tasks.iter().map(|t| t.finish).max().unwrap_or(0)
    }

    /// Returns the slices that belong to a task.
    pub fn slices_for_task(&self, id: u32) -> Vec<&Slice> {
        self.timeline.iter().filter(|s| s.id == id).collect()
    }

    /// Finds the scheduled record of a task.
    pub fn task(&self, id: u32) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn sample_schedule() -> Schedule {
        Schedule {
            tasks: vec![
                ScheduledTask::new(Task::new(1, 0, 4), 0, 6),
                ScheduledTask::new(Task::new(2, 0, 2), 2, 4),
            ],
            timeline: vec![Slice::new(1, 0, 2), Slice::new(2, 2, 4), Slice::new(1, 4, 6)],
        }
    }

    #[test]
    fn test_slice_length() {
        let s = Slice::new(7, 3, 8);
        assert_eq!(s.burst, 5);
        assert_eq!(s.priority, None);
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_schedule().makespan(), 6);
        assert_eq!(Schedule::new().makespan(), 0);
    }

    #[test]
    fn test_slices_for_task() {
        let s = sample_schedule();
        assert_eq!(s.slices_for_task(1).len(), 2);
        assert_eq!(s.slices_for_task(2).len(), 1);
        assert!(s.slices_for_task(9).is_empty());
    }

    #[test]
    fn test_task_lookup() {
        let s = sample_schedule();
        assert_eq!(s.task(2).map(|t| t.finish), Some(4));
        assert!(s.task(3).is_none());
    }

    #[test]
    fn test_slice_wire_shape() {
        let plain = serde_json::to_value(Slice::new(1, 0, 3)).unwrap();
        assert_eq!(plain, serde_json::json!({"id": 1, "start": 0, "finish": 3, "burst": 3}));

        let prio = serde_json::to_value(Slice::new(1, 0, 3).with_priority(Some(2))).unwrap();
        assert_eq!(prio["priority"], 2);
    }

    #[test]
    fn test_timeline_mode_names() {
        assert_eq!(
            serde_json::to_string(&TimelineMode::Segmented).unwrap(),
            "\"segmented\""
        );
        assert_eq!(TimelineMode::default(), TimelineMode::Collapsed);
    }
}
