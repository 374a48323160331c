//! Shared dispatch loop for non-preemptive rule-driven schedulers.
//!
//! # Algorithm
//!
//! 1. At each dispatch point, the ready set is every unfinished task whose
//!    arrival is at or before the clock.
//! 2. If the ready set is empty, jump the clock to the earliest pending
//!    arrival.
//! 3. The rule picks one ready task (first minimum in `order` wins), which
//!    runs to completion in a single slice.
//!
//! # Complexity
//! O(n²).

use tracing::debug;

use crate::dispatching::{select_best, Candidate, DispatchingRule};
use crate::models::{Schedule, ScheduledTask, Slice, Task};

/// Runs `order` to completion, choosing each next task with `rule`.
///
/// `order` is the caller's pre-sorted task sequence; it fixes both tie-breaks
/// and the order of tasks in the returned schedule.
pub(crate) fn run<R>(order: &[&Task], rule: &R) -> Schedule
where
    R: DispatchingRule + ?Sized,
{
    let n = order.len();
    let mut completed = vec![false; n];
    let mut spans: Vec<Option<(i64, i64)>> = vec![None; n];
    let mut timeline = Vec::with_capacity(n);
    let mut current_time = 0;
    debug!(rule = rule.name(), policy = rule.description(), tasks = n, "dispatch loop");

    for _ in 0..n {
        let mut picked = select_best(rule, ready(order, &completed, current_time));
        if picked.is_none() {
            let Some(next_arrival) = order
                .iter()
                .zip(&completed)
                .filter(|(_, &done)| !done)
                .map(|(t, _)| t.arrival)
                .min()
            else {
                break;
            };
            current_time = next_arrival;
            picked = select_best(rule, ready(order, &completed, current_time));
        }
        let Some(idx) = picked else {
            break;
        };

        let task = order[idx];
        let start = current_time.max(task.arrival);
        let finish = start + task.burst;
        debug!(rule = rule.name(), task = task.id, start, finish, "dispatch");

        spans[idx] = Some((start, finish));
        completed[idx] = true;
        timeline.push(Slice::new(task.id, start, finish));
        current_time = finish;
    }

    let tasks = order
        .iter()
        .zip(spans)
        .filter_map(|(task, span)| {
            span.map(|(start, finish)| ScheduledTask::new((*task).clone(), start, finish))
        })
        .collect();

    Schedule { tasks, timeline }
}

fn ready<'a>(
    order: &'a [&'a Task],
    completed: &'a [bool],
    now: i64,
) -> impl Iterator<Item = Candidate<'a>> + 'a {
    order
        .iter()
        .enumerate()
        .filter(move |&(i, t)| !completed[i] && t.arrival <= now)
        .map(|(i, t)| Candidate::new(i, t, t.burst))
}
