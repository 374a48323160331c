//! CPU scheduling simulator.
//!
//! Simulates classic single-CPU process-scheduling policies over a task set
//! and reports per-task timing, aggregate statistics and an execution
//! timeline. Every run is a pure, deterministic function of its input.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `ScheduledTask`, `Slice`,
//!   `Schedule`, `SimulationResult`, `TimelineMode`
//! - **`dispatching`**: Selection rules shared by SJF, SRTF and Priority
//! - **`scheduler`**: The five algorithms and the metrics calculator
//! - **`validation`**: Input integrity checks (empty sets, IDs, ranges, quantum)
//! - **`simulation`**: Facade: algorithm lookup, configuration, requests
//! - **`experiment`**: Random workload batches
//! - **`report`**: Plain-text result tables
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::Task;
//! use cpu_sched_sim::simulate;
//!
//! let tasks = vec![Task::new(1, 0, 4), Task::new(2, 0, 4)];
//! let result = simulate("rr", &tasks, Some(2)).unwrap();
//! assert_eq!(result.timeline.len(), 4);
//! assert_eq!(result.cpu_utilization, 100.0);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod experiment;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;

pub use error::SimulationError;
pub use simulation::{simulate, Algorithm, SimulationConfig, SimulationRequest, Simulator};
