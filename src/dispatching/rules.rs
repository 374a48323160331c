//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for tasks that should run first.

use super::{Candidate, DispatchingRule, RuleScore};

/// Shortest Job First.
///
/// Scores by total burst. Used non-preemptively.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.task.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Scores by work still owed, so a newly arrived short task beats a
/// long task that has already run.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Static priority, lower value wins.
///
/// Tasks without a priority rank behind every prioritized task.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriority;

impl DispatchingRule for LowestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate
            .task
            .priority
            .map(RuleScore::from)
            .unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value First"
    }
}
