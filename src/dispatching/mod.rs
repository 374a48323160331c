//! Dispatching rules for picking the next task to run.
//!
//! SJF, SRTF and Priority differ only in the key they minimise over the
//! ready set. Each key is a [`DispatchingRule`]; [`select_best`] runs the
//! shared linear scan.
//!
//! # Tie-breaking
//! The scan keeps the first candidate that achieves the minimum score,
//! comparing with a strict `<`. Callers therefore control ties purely
//! through the order in which they offer candidates.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, select_best, Candidate};
//! use cpu_sched_sim::models::Task;
//!
//! let tasks = vec![Task::new(1, 0, 8), Task::new(2, 0, 3)];
//! let best = select_best(
//!     &rules::ShortestBurst,
//!     tasks.iter().enumerate().map(|(i, t)| Candidate::new(i, t, t.burst)),
//! );
//! assert_eq!(best, Some(1));
//! ```

pub mod rules;

use std::fmt::Debug;

use crate::models::Task;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A ready task offered to a dispatching rule.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Caller-side index of the task.
    pub index: usize,
    /// The task itself.
    pub task: &'a Task,
    /// Work still owed to the task.
    pub remaining: i64,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate.
    pub fn new(index: usize, task: &'a Task, remaining: i64) -> Self {
        Self {
            index,
            task,
            remaining,
        }
    }
}

/// A rule that scores ready tasks.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a candidate. Lower = dispatched first.
    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Returns the `index` of the lowest-scoring candidate.
///
/// Ties keep the earliest candidate in iteration order.
pub fn select_best<'a, R, I>(rule: &R, candidates: I) -> Option<usize>
where
    R: DispatchingRule + ?Sized,
    I: IntoIterator<Item = Candidate<'a>>,
{
    let mut best: Option<(RuleScore, usize)> = None;
    for candidate in candidates {
        let score = rule.evaluate(&candidate);
        match best {
            Some((best_score, _)) if score >= best_score => {}
            _ => best = Some((score, candidate.index)),
        }
    }
    best.map(|(_, index)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(tasks: &[Task]) -> impl Iterator<Item = Candidate<'_>> {
        tasks
            .iter()
            .enumerate()
            .map(|(i, t)| Candidate::new(i, t, t.burst))
    }

    #[test]
    fn test_select_minimum() {
        let tasks = vec![Task::new(1, 0, 5), Task::new(2, 0, 2), Task::new(3, 0, 9)];
        assert_eq!(select_best(&rules::ShortestBurst, offer(&tasks)), Some(1));
    }

    #[test]
    fn test_tie_keeps_first() {
        let tasks = vec![Task::new(7, 0, 4), Task::new(3, 0, 4), Task::new(5, 0, 4)];
        assert_eq!(select_best(&rules::ShortestBurst, offer(&tasks)), Some(0));
    }

    #[test]
    fn test_empty_candidates() {
        assert_eq!(select_best(&rules::ShortestBurst, offer(&[])), None);
    }

    #[test]
    fn test_dyn_rule() {
        let rule: &dyn DispatchingRule = &rules::ShortestRemaining;
        let tasks = vec![Task::new(1, 0, 8), Task::new(2, 0, 4)];
        let candidates = vec![Candidate::new(0, &tasks[0], 1), Candidate::new(1, &tasks[1], 4)];
        assert_eq!(select_best(rule, candidates), Some(0));
    }
}
