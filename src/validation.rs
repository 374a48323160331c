//! Input validation for simulation requests.
//!
//! Checks structural integrity of a task set before any algorithm runs.
//! Detects:
//! - Empty task sets
//! - Zero or duplicate IDs
//! - Negative arrivals and non-positive bursts
//! - Missing priorities when the Priority algorithm is requested
//! - Missing or non-positive Round-Robin quantum
//!
//! All problems are collected; validation never stops at the first one.

use std::collections::HashSet;

use crate::models::Task;
use crate::simulation::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No tasks supplied.
    EmptyTaskSet,
    /// Task ID is zero.
    InvalidId,
    /// Two tasks share the same ID.
    DuplicateId,
    /// Arrival time below zero.
    NegativeArrival,
    /// Burst time zero or negative.
    NonPositiveBurst,
    /// Priority algorithm requested for a task without a priority.
    MissingPriority,
    /// Round-Robin quantum missing, zero or negative.
    InvalidQuantum,
    /// A request field is missing or has the wrong type.
    InvalidField,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task set for the given algorithm.
///
/// `quantum` is only inspected for [`Algorithm::RoundRobin`]; pass the
/// effective quantum (after any configured default has been applied).
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task], algorithm: Algorithm, quantum: Option<i64>) -> ValidationResult {
    let mut errors = Vec::new();

    if tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTaskSet,
            "task set is empty",
        ));
    }

    if algorithm == Algorithm::RoundRobin {
        match quantum {
            Some(q) if q > 0 => {}
            Some(q) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("quantum must be positive, got {q}"),
            )),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                "round-robin requires a quantum",
            )),
        }
    }

    let mut ids = HashSet::new();
    for task in tasks {
        if task.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "task id must be positive, got 0",
            ));
        } else if !ids.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate task id: {}", task.id),
            ));
        }

        if task.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("task {} has negative arrival {}", task.id, task.arrival),
            ));
        }

        if task.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("task {} has burst {}", task.id, task.burst),
            ));
        }

        if algorithm == Algorithm::Priority && task.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("task {} has no priority", task.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any time the simulation can reach: `max(arrival) + sum(burst)`.
///
/// Returns `None` if the bound does not fit in `i64`.
pub fn time_horizon(tasks: &[Task]) -> Option<i64> {
    let latest_arrival = tasks.iter().map(|t| t.arrival).max().unwrap_or(0);
    tasks
        .iter()
        .try_fold(latest_arrival, |acc, t| acc.checked_add(t.burst))
}
