//! Simulation error type.

use std::fmt;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Errors returned by the simulation facade.
///
/// A failed call never yields a partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The requested algorithm name is not one of the five supported.
    UnsupportedAlgorithm(String),
    /// Round-Robin quantum missing, zero or negative.
    InvalidQuantum(Option<i64>),
    /// One or more tasks are missing fields or hold out-of-range values.
    MalformedTask(Vec<ValidationError>),
    /// No tasks were supplied.
    EmptyTaskSet,
    /// Fault while computing the schedule.
    Simulation(String),
}

impl SimulationError {
    /// Collapses a validation report into a single error.
    ///
    /// Precedence: empty task set, then invalid quantum, then malformed tasks.
    pub fn from_validation(errors: Vec<ValidationError>, quantum: Option<i64>) -> Self {
        if errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTaskSet)
        {
            return Self::EmptyTaskSet;
        }
        if errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum)
        {
            return Self::InvalidQuantum(quantum);
        }
        Self::MalformedTask(errors)
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedAlgorithm(name) => write!(f, "algorithm not supported: '{name}'"),
            Self::InvalidQuantum(Some(q)) => {
                write!(f, "invalid quantum {q}: must be a positive integer")
            }
            Self::InvalidQuantum(None) => write!(f, "missing quantum for round-robin"),
            Self::MalformedTask(errors) => {
                write!(f, "malformed task input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e.message)?;
                }
                Ok(())
            }
            Self::EmptyTaskSet => write!(f, "task set is empty"),
            Self::Simulation(message) => write!(f, "simulation failed: {message}"),
        }
    }
}

impl std::error::Error for SimulationError {}
