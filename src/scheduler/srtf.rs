//! Shortest-Remaining-Time-First, preemptive.
//!
//! # Algorithm
//!
//! The clock advances one unit at a time. Each unit goes to the ready task
//! with the least remaining work; ties go to the task listed first in the
//! input (no re-sorting). When nothing is ready the clock jumps to the next
//! arrival.
//!
//! # Timeline
//! With [`TimelineMode::Collapsed`] each task contributes one slice from its
//! first dispatch to its completion, with `burst` equal to the task's total
//! burst. [`TimelineMode::Segmented`] emits one slice per contiguous run.
//!
//! # Complexity
//! O(B · n) where B is the total burst.

use tracing::debug;

use crate::dispatching::rules::ShortestRemaining;
use crate::dispatching::{select_best, Candidate};
use crate::models::{Schedule, ScheduledTask, Slice, Task, TimelineMode};

/// Schedules the task with the least remaining work at every time unit.
pub fn srtf(tasks: &[Task], mode: TimelineMode) -> Schedule {
    let n = tasks.len();
    let mut remaining: Vec<i64> = tasks.iter().map(|t| t.burst).collect();
    let mut first_start: Vec<Option<i64>> = vec![None; n];
    let mut finish = vec![0; n];
    let mut timeline = Vec::new();
    let mut completed = 0;
    let mut current_time = 0;
    // Task currently holding the CPU and the start of its current run.
    let mut segment: Option<(usize, i64)> = None;

    while completed < n {
        let ready = tasks
            .iter()
            .enumerate()
            .filter(|&(i, t)| remaining[i] > 0 && t.arrival <= current_time)
            .map(|(i, t)| Candidate::new(i, t, remaining[i]));

        let Some(idx) = select_best(&ShortestRemaining, ready) else {
            let Some(next_arrival) = tasks
                .iter()
                .zip(&remaining)
                .filter(|(_, &left)| left > 0)
                .map(|(t, _)| t.arrival)
                .min()
            else {
                break;
            };
            current_time = next_arrival;
            continue;
        };

        if segment.map(|(running, _)| running) != Some(idx) {
            if let Some((preempted, seg_start)) = segment.take() {
                debug!(task = tasks[preempted].id, by = tasks[idx].id, at = current_time, "srtf preempt");
                if mode == TimelineMode::Segmented {
                    timeline.push(Slice::new(tasks[preempted].id, seg_start, current_time));
                }
            }
            segment = Some((idx, current_time));
        }
        let start = *first_start[idx].get_or_insert(current_time);

        remaining[idx] -= 1;
        current_time += 1;

        if remaining[idx] == 0 {
            let task = &tasks[idx];
            finish[idx] = current_time;
            completed += 1;
            debug!(task = task.id, start, finish = current_time, "srtf complete");

            let seg_start = segment.take().map_or(start, |(_, s)| s);
            timeline.push(match mode {
                TimelineMode::Collapsed => {
                    Slice::spanning(task.id, start, current_time, task.burst)
                }
                TimelineMode::Segmented => Slice::new(task.id, seg_start, current_time),
            });
        }
    }

    let tasks = tasks
        .iter()
        .zip(first_start)
        .zip(finish)
        .map(|((task, start), finish)| {
            // Every task runs at least one unit, so `start` is always set.
            ScheduledTask::new(task.clone(), start.unwrap_or(finish), finish)
        })
        .collect();

    Schedule { tasks, timeline }
}
