//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort tasks by arrival (equal arrivals keep input order).
//! 2. Run each task to completion at `max(clock, arrival)`.
//!
//! # Complexity
//! O(n log n).

use tracing::debug;

use crate::models::{Schedule, ScheduledTask, Slice, Task};

/// Schedules tasks in arrival order, non-preemptively.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Task;
/// use cpu_sched_sim::scheduler::fcfs;
///
/// let schedule = fcfs(&[Task::new(1, 0, 5), Task::new(2, 0, 3)]);
/// assert_eq!(schedule.task(1).unwrap().finish, 5);
/// assert_eq!(schedule.task(2).unwrap().finish, 8);
/// ```
pub fn fcfs(tasks: &[Task]) -> Schedule {
    let mut order: Vec<&Task> = tasks.iter().collect();
    order.sort_by_key(|t| t.arrival);

    let mut schedule = Schedule::new();
    let mut current_time = 0;

    for task in order {
        let start = current_time.max(task.arrival);
        let finish = start + task.burst;
        debug!(task = task.id, start, finish, "fcfs dispatch");

        schedule.timeline.push(Slice::new(task.id, start, finish));
        schedule
            .tasks
            .push(ScheduledTask::new(task.clone(), start, finish));
        current_time = finish;
    }

    schedule
}
