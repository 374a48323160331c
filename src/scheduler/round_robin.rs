//! Round-Robin with a fixed quantum.
//!
//! # Algorithm
//!
//! 1. Admit every arrived, unfinished, not-yet-admitted task to the tail of a
//!    FIFO ready queue (in input order).
//! 2. If the queue is empty, jump the clock to the next pending arrival.
//! 3. Run the head task for `min(quantum, remaining)` and record the slice.
//! 4. Admit arrivals that happened during the slice, then re-queue the task
//!    at the tail if it still has work.
//!
//! Admitting mid-slice arrivals before re-queuing means a newcomer runs
//! ahead of the task it arrived behind.

use std::collections::VecDeque;

use tracing::debug;

use crate::models::{Schedule, ScheduledTask, Slice, Task};

/// Schedules tasks in FIFO order, preempting after `quantum` time units.
///
/// `quantum` must be positive; the facade validates it.
pub fn round_robin(tasks: &[Task], quantum: i64) -> Schedule {
    let n = tasks.len();
    let mut remaining: Vec<i64> = tasks.iter().map(|t| t.burst).collect();
    let mut first_start: Vec<Option<i64>> = vec![None; n];
    let mut finish = vec![0; n];
    let mut admitted = vec![false; n];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);
    let mut timeline = Vec::new();
    let mut outstanding: i64 = remaining.iter().sum();
    let mut current_time = 0;

    while outstanding > 0 {
        admit(tasks, &remaining, &mut admitted, &mut queue, current_time);

        let Some(idx) = queue.pop_front() else {
            let Some(next_arrival) = tasks
                .iter()
                .enumerate()
                .filter(|&(i, _)| !admitted[i] && remaining[i] > 0)
                .map(|(_, t)| t.arrival)
                .min()
            else {
                break;
            };
            current_time = next_arrival;
            continue;
        };

        first_start[idx].get_or_insert(current_time);
        let run = quantum.min(remaining[idx]);
        debug!(task = tasks[idx].id, start = current_time, run, "rr slice");
        timeline.push(Slice::new(tasks[idx].id, current_time, current_time + run));

        remaining[idx] -= run;
        outstanding -= run;
        current_time += run;

        admit(tasks, &remaining, &mut admitted, &mut queue, current_time);

        if remaining[idx] > 0 {
            queue.push_back(idx);
        } else {
            finish[idx] = current_time;
        }
    }

    let tasks = tasks
        .iter()
        .zip(first_start)
        .zip(finish)
        .map(|((task, start), finish)| {
            // Every task gets at least one slice, so `start` is always set.
            ScheduledTask::new(task.clone(), start.unwrap_or(finish), finish)
        })
        .collect();

    Schedule { tasks, timeline }
}

fn admit(
    tasks: &[Task],
    remaining: &[i64],
    admitted: &mut [bool],
    queue: &mut VecDeque<usize>,
    now: i64,
) {
    for (i, task) in tasks.iter().enumerate() {
        if !admitted[i] && remaining[i] > 0 && task.arrival <= now {
            admitted[i] = true;
            queue.push_back(i);
        }
    }
}
