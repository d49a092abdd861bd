//! CPU scheduling engine and performance metrics.
//!
//! Provides the seven classic single-CPU scheduling disciplines behind one
//! event-driven simulation loop, and the metrics calculator that reduces
//! a finished run to averages and throughput.
//!
//! # Algorithms
//!
//! | Algorithm | Selection | Preemptive |
//! |-----------|-----------|------------|
//! | FCFS | earliest arrival | no |
//! | SJF | shortest burst | no |
//! | SRTF (FCFS tie-break) | shortest remaining | at arrivals |
//! | SRTF (Priority tie-break) | shortest remaining | at arrivals |
//! | Priority (Non-preemptive) | highest priority | no |
//! | Priority (Preemptive) | highest priority | at arrivals |
//! | Round Robin | ready-queue order | at quantum expiry |
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Schrage (1968), "A Proof of the Optimality of the Shortest
//!   Remaining Processing Time Discipline"

mod algorithm;
mod engine;
mod metrics;

pub use algorithm::{Algorithm, Preemption};
pub use engine::{AlgorithmReport, SchedulingEngine, SimulationRequest, SimulationRun};
pub use metrics::ScheduleMetrics;
