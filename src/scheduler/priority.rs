//! Static priority, non-preemptive.
//!
//! Same dispatch loop as SJF with the selection key swapped for the task
//! priority (lower value wins). Tasks are pre-sorted by arrival only.
//! Slices carry the task priority.

use super::non_preemptive;
use crate::dispatching::rules::LowestPriority;
use crate::models::{Schedule, Task};

/// Schedules the most important ready task first, each to completion.
pub fn priority(tasks: &[Task]) -> Schedule {
    let mut order: Vec<&Task> = tasks.iter().collect();
    order.sort_by_key(|t| t.arrival);

    let mut schedule = non_preemptive::run(&order, &LowestPriority);
    for slice in &mut schedule.timeline {
        slice.priority = schedule
            .tasks
            .iter()
            .find(|t| t.id() == slice.id)
            .and_then(|t| t.task.priority);
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_value_runs_first() {
        let tasks = vec![
            Task::new(1, 0, 3).with_priority(3),
            Task::new(2, 0, 2).with_priority(1),
            Task::new(3, 0, 1).with_priority(2),
        ];
        let s = priority(&tasks);
        let order: Vec<u32> = s.timeline.iter().map(|sl| sl.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(s.task(1).unwrap().finish, 6);
    }

    #[test]
    fn test_non_preemptive() {
        let tasks = vec![
            Task::new(1, 0, 5).with_priority(5),
            Task::new(2, 1, 2).with_priority(1),
        ];
        let s = priority(&tasks);
        assert_eq!(s.task(1).unwrap().finish, 5);
        assert_eq!(s.task(2).unwrap().start, 5);
    }

    #[test]
    fn test_ties_follow_arrival_order() {
        let tasks = vec![
            Task::new(1, 0, 6).with_priority(1),
            Task::new(2, 3, 1).with_priority(2),
            Task::new(3, 2, 1).with_priority(2),
        ];
        let s = priority(&tasks);
        let order: Vec<u32> = s.timeline.iter().map(|sl| sl.id).collect();
        assert_eq!(order, vec![1, 3, 2]);
    }

    #[test]
    fn test_slices_carry_priority() {
        let s = priority(&[Task::new(1, 0, 2).with_priority(4)]);
        assert_eq!(s.timeline[0].priority, Some(4));
    }
}
