//! Process model.
//!
//! A process is the unit of work competing for the single simulated CPU.
//! It carries immutable input attributes (arrival, burst, priority) and
//! simulation-derived attributes that are cleared by [`ProcessRecord::reset`]
//! and populated by a scheduling run.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

use crate::error::{SchedError, SchedResult};
use crate::validation::validate_specs;

/// Process identifier. Must be positive.
pub type ProcessId = u32;

/// Raw construction tuple for a process.
///
/// Produced by manual entry or by [`crate::workload`]; validated when
/// turned into a [`ProcessRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier (> 0).
    pub id: ProcessId,
    /// Time the process enters the ready state (≥ 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_time: i64,
    /// Scheduling priority (higher = more urgent).
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a spec with priority 0.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// A process together with its per-run simulation state.
///
/// Derived metrics are `None` until the process finishes in a run
/// (`response_time` and `first_execution_start` are set on first dispatch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Arrival time (ticks).
    pub arrival_time: i64,
    /// Original burst time (ticks).
    pub burst_time: i64,
    /// Scheduling priority (higher = more urgent).
    pub priority: i32,
    /// CPU time still required in the current run.
    pub remaining_time: i64,
    /// Time the process finished.
    pub completion_time: Option<i64>,
    /// `completion - arrival`.
    pub turnaround_time: Option<i64>,
    /// `turnaround - burst`.
    pub waiting_time: Option<i64>,
    /// `first_execution_start - arrival`.
    pub response_time: Option<i64>,
    /// Time the process was first dispatched.
    pub first_execution_start: Option<i64>,
}

impl ProcessRecord {
    /// Creates a record in its pre-run state.
    ///
    /// # Errors
    /// [`crate::ErrorKind::InvalidProcessSpec`] if `id` is 0, `arrival_time`
    /// is negative, or `burst_time` is not positive.
    pub fn new(
        id: ProcessId,
        arrival_time: i64,
        burst_time: i64,
        priority: i32,
    ) -> SchedResult<Self> {
        if id == 0 {
            return Err(SchedError::invalid_spec("process id must be positive"));
        }
        if arrival_time < 0 {
            return Err(SchedError::invalid_spec(format!(
                "process {id}: arrival time must be non-negative, got {arrival_time}"
            )));
        }
        if burst_time <= 0 {
            return Err(SchedError::invalid_spec(format!(
                "process {id}: burst time must be positive, got {burst_time}"
            )));
        }

        Ok(Self {
            id,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
            response_time: None,
            first_execution_start: None,
        })
    }

    /// Builds records from a collection of specs.
    ///
    /// The whole collection is validated first (including duplicate ids);
    /// every detected problem is reported.
    pub fn from_specs(specs: &[ProcessSpec]) -> Result<Vec<Self>, Vec<SchedError>> {
        validate_specs(specs)?;
        specs
            .iter()
            .map(|s| Self::try_from(*s))
            .collect::<SchedResult<Vec<_>>>()
            .map_err(|e| vec![e])
    }

    /// Restores the pre-run state. Input attributes are untouched.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = None;
        self.turnaround_time = None;
        self.waiting_time = None;
        self.response_time = None;
        self.first_execution_start = None;
    }

    /// Whether the process finished in the last run.
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Whether the process has been dispatched at least once.
    pub fn has_started(&self) -> bool {
        self.first_execution_start.is_some()
    }

    /// Returns the input tuple this record was built from.
    pub fn spec(&self) -> ProcessSpec {
        ProcessSpec {
            id: self.id,
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
        }
    }

    /// Records the first dispatch at time `t`. Later dispatches are ignored.
    pub(crate) fn mark_dispatched(&mut self, t: i64) {
        if self.first_execution_start.is_none() {
            self.first_execution_start = Some(t);
            self.response_time = Some(t - self.arrival_time);
        }
    }

    /// Consumes `slice` ticks of CPU time.
    pub(crate) fn consume(&mut self, slice: i64) {
        debug_assert!(slice > 0 && slice <= self.remaining_time);
        self.remaining_time -= slice;
    }

    /// Fills in the derived metrics for completion at time `t`.
    pub(crate) fn finish(&mut self, t: i64) {
        debug_assert_eq!(self.remaining_time, 0);
        let turnaround = t - self.arrival_time;
        self.completion_time = Some(t);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }
}

impl TryFrom<ProcessSpec> for ProcessRecord {
    type Error = SchedError;

    fn try_from(spec: ProcessSpec) -> SchedResult<Self> {
        Self::new(spec.id, spec.arrival_time, spec.burst_time, spec.priority)
    }
}
