//! Single-CPU scheduling simulator.
//!
//! Simulates how classic CPU scheduling disciplines would order a fixed
//! set of processes and reports per-process and aggregate metrics
//! (waiting, turnaround and response time, throughput).
//!
//! # Modules
//!
//! - **`models`**: `ProcessSpec` (input tuple) and `ProcessRecord`
//!   (per-run process state)
//! - **`dispatching`**: Selection rules (FCFS, SJF, SRT, PRIORITY, QUEUE)
//!   and the rule engine composing them with tie-breakers
//! - **`scheduler`**: `SchedulingEngine` (seven algorithms, one loop) and
//!   `ScheduleMetrics`
//! - **`validation`**: Input integrity checks (ids, arrival, burst,
//!   quantum, context-switch cost)
//! - **`workload`**: Seeded synthetic process generator
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{ProcessRecord, ProcessSpec};
//! use u_cpusched::scheduler::{Algorithm, SchedulingEngine};
//!
//! let specs = vec![
//!     ProcessSpec::new(1, 0, 8),
//!     ProcessSpec::new(2, 1, 4),
//!     ProcessSpec::new(3, 2, 9),
//!     ProcessSpec::new(4, 3, 5),
//! ];
//! let processes = ProcessRecord::from_specs(&specs).unwrap();
//!
//! let run = SchedulingEngine::new()
//!     .run(&processes, Algorithm::Fcfs)
//!     .unwrap();
//! let metrics = run.metrics();
//! assert!((metrics.average_waiting_time - 8.75).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ErrorKind, SchedError, SchedResult};
