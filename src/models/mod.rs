//! Simulation domain models.
//!
//! Provides the data types shared by every algorithm: the immutable task
//! input, the computed per-task record, timeline slices and the unified
//! result.
//!
//! # Data Flow
//!
//! | Stage | Type |
//! |-------|------|
//! | Input | [`Task`] |
//! | Algorithm output | [`Schedule`] of [`ScheduledTask`] + [`Slice`] |
//! | Final | [`SimulationResult`] |

mod result;
mod schedule;
mod task;

pub use result::SimulationResult;
pub use schedule::{Schedule, Slice, TimelineMode};
pub use task::{ScheduledTask, Task};
