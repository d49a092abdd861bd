//! Schedule performance metrics.
//!
//! Reduces a post-simulation process collection to aggregate statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | Mean of (turnaround - burst) |
//! | Avg Turnaround Time | Mean of (completion - arrival) |
//! | Avg Response Time | Mean of (first dispatch - arrival) |
//! | Throughput | count / (max completion - min arrival) |
//! | Makespan (C_max) | Latest completion time |
//! | Max Waiting Time | Largest single wait |
//! | CPU Utilization | Total burst / (max completion - min arrival) |
//!
//! Only processes that completed in the run are counted. An empty
//! collection reduces to all-zero metrics; use
//! [`ScheduleMetrics::calculate_strict`] to treat it as an error instead.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, SchedError, SchedResult};
use crate::models::ProcessRecord;

/// Aggregate scheduling performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of completed processes the averages are taken over.
    pub process_count: usize,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Completed processes per tick of simulated span.
    pub throughput: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Largest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Fraction of the span the CPU spent on process work (0.0..=1.0).
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from simulated process records.
    ///
    /// Never fails: an empty collection (or one that was never simulated)
    /// yields zero metrics, and a zero span yields zero throughput.
    pub fn calculate(processes: &[ProcessRecord]) -> Self {
        let mut count: usize = 0;
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_response: i64 = 0;
        let mut total_burst: i64 = 0;
        let mut max_waiting: i64 = 0;
        let mut max_completion: Option<i64> = None;
        let mut min_arrival: Option<i64> = None;

        for p in processes {
            let Some(completion) = p.completion_time else {
                continue;
            };
            count += 1;

            let waiting = p.waiting_time.unwrap_or(0);
            total_waiting += waiting;
            total_turnaround += p.turnaround_time.unwrap_or(completion - p.arrival_time);
            total_response += p.response_time.unwrap_or(0);
            total_burst += p.burst_time;
            max_waiting = max_waiting.max(waiting);

            max_completion = Some(max_completion.map_or(completion, |m| m.max(completion)));
            min_arrival = Some(min_arrival.map_or(p.arrival_time, |m| m.min(p.arrival_time)));
        }

        if count == 0 {
            return Self::default();
        }

        let n = count as f64;
        let makespan = max_completion.unwrap_or(0);
        let span = makespan - min_arrival.unwrap_or(0);

        let (throughput, cpu_utilization) = if span > 0 {
            (n / span as f64, total_burst as f64 / span as f64)
        } else {
            (0.0, 0.0)
        };

        Self {
            process_count: count,
            average_waiting_time: total_waiting as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
            average_response_time: total_response as f64 / n,
            throughput,
            makespan,
            max_waiting_time: max_waiting,
            cpu_utilization,
        }
    }

    /// Like [`calculate`](Self::calculate), but refuses to reduce a
    /// collection with no completed processes.
    ///
    /// # Errors
    /// [`ErrorKind::EmptyDataset`] if no process has completed.
    pub fn calculate_strict(processes: &[ProcessRecord]) -> SchedResult<Self> {
        let metrics = Self::calculate(processes);
        if metrics.is_empty() {
            return Err(SchedError::new(
                ErrorKind::EmptyDataset,
                format!(
                    "no completed processes among {} records; throughput is undefined",
                    processes.len()
                ),
            ));
        }
        Ok(metrics)
    }

    /// Whether no process contributed to these metrics.
    pub fn is_empty(&self) -> bool {
        self.process_count == 0
    }
}
