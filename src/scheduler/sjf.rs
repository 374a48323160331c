//! Shortest-Job-First, non-preemptive.
//!
//! Tasks are pre-sorted by `(arrival, burst)`. The pre-sort is only an
//! ordering hint: it decides ties between equally short ready tasks, while
//! the dispatch loop still picks the shortest ready burst at each step.

use super::non_preemptive;
use crate::dispatching::rules::ShortestBurst;
use crate::models::{Schedule, Task};

/// Schedules the shortest ready job first, each to completion.
pub fn sjf(tasks: &[Task]) -> Schedule {
    let mut order: Vec<&Task> = tasks.iter().collect();
    order.sort_by_key(|t| (t.arrival, t.burst));
    non_preemptive::run(&order, &ShortestBurst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_short_job_cannot_preempt() {
        let s = sjf(&[Task::new(1, 0, 8), Task::new(2, 1, 4)]);
        assert_eq!(s.task(1).unwrap().finish, 8);
        assert_eq!(s.task(2).unwrap().start, 8);
        assert_eq!(s.task(2).unwrap().finish, 12);
    }

    #[test]
    fn test_shortest_ready_first() {
        let tasks = vec![
            Task::new(1, 0, 7),
            Task::new(2, 2, 4),
            Task::new(3, 4, 1),
            Task::new(4, 5, 4),
        ];
        let s = sjf(&tasks);
        let order: Vec<u32> = s.timeline.iter().map(|sl| sl.id).collect();
        assert_eq!(order, vec![1, 3, 2, 4]);
        assert_eq!(s.task(3).unwrap().finish, 8);
        assert_eq!(s.task(2).unwrap().finish, 12);
        assert_eq!(s.task(4).unwrap().finish, 16);
    }

    #[test]
    fn test_equal_bursts_follow_presort() {
        // Same burst, same arrival: the stable pre-sort keeps input order.
        let s = sjf(&[Task::new(5, 0, 3), Task::new(2, 0, 3)]);
        assert_eq!(s.timeline[0].id, 5);

        // Same burst, earlier arrival sorts first even though both are ready.
        let s = sjf(&[Task::new(1, 0, 10), Task::new(2, 3, 2), Task::new(3, 1, 2)]);
        let order: Vec<u32> = s.timeline.iter().map(|sl| sl.id).collect();
        assert_eq!(order, vec![1, 3, 2]);
    }

    #[test]
    fn test_tasks_reported_in_presort_order() {
        let s = sjf(&[Task::new(1, 2, 1), Task::new(2, 0, 9), Task::new(3, 0, 4)]);
        let ids: Vec<u32> = s.tasks.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
