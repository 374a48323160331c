//! Single-CPU scheduling algorithms and schedule metrics.
//!
//! Each algorithm consumes an immutable task slice and returns a fresh
//! [`Schedule`](crate::models::Schedule); no algorithm keeps state between
//! calls or touches the caller's tasks.
//!
//! # Algorithms
//!
//! | Function | Policy | Preemptive |
//! |----------|--------|-----------|
//! | [`fcfs`] | First-Come-First-Served | no |
//! | [`sjf`] | Shortest-Job-First | no |
//! | [`srtf`] | Shortest-Remaining-Time-First | yes, per time unit |
//! | [`round_robin`] | Round-Robin | yes, per quantum |
//! | [`priority`] | Static priority (lower wins) | no |
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
pub mod metrics;
mod non_preemptive;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::fcfs;
pub use priority::priority;
pub use round_robin::round_robin;
pub use sjf::sjf;
pub use srtf::srtf;
