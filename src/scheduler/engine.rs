//! Event-driven single-CPU scheduling engine.
//!
//! # Algorithm
//!
//! One simulation loop serves all seven algorithms:
//!
//! 1. Admit every process whose arrival time has been reached into the
//!    ready set (issuing a ready-queue ticket).
//! 2. If the ready set is empty, jump the clock to the next arrival.
//!    Idling costs no context switch and the next dispatch is not charged.
//! 3. Select a process with the algorithm's rule chain. If it differs from
//!    the process that ran last, charge the context-switch cost.
//! 4. Run it for one slice: to completion (non-preemptive), up to the next
//!    arrival (preemptive), or up to the quantum (Round Robin). If a
//!    preemptive algorithm admitted arrivals while the switch was being
//!    charged, the slice lasts one tick so they compete right after it.
//! 5. Admit arrivals that happened during the slice, then either finish
//!    the process or, for Round Robin, re-enqueue it behind them.
//!
//! Preemptive algorithms only re-evaluate at arrivals and completions.
//! Between those events the running process stays the best candidate, so
//! the result is identical to re-evaluating every tick, with or without a
//! context-switch cost.
//!
//! # Complexity
//! O(e * n) where e = number of slices and n = ready-set size.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::algorithm::{Algorithm, Preemption};
use super::metrics::ScheduleMetrics;
use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::error::SchedResult;
use crate::models::{ProcessId, ProcessRecord, ProcessSpec};
use crate::validation::{flatten, validate_context_switch, validate_specs, validate_unique_ids};

/// Input container for a single simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: Vec<ProcessSpec>,
    /// Algorithm (and its parameters).
    pub algorithm: Algorithm,
    /// Cost of switching the CPU between two different processes (ticks).
    #[serde(default)]
    pub context_switch_time: i64,
}

impl SimulationRequest {
    /// Creates a request with zero context-switch cost.
    pub fn new(processes: Vec<ProcessSpec>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            context_switch_time: 0,
        }
    }

    /// Sets the context-switch cost.
    pub fn with_context_switch(mut self, context_switch_time: i64) -> Self {
        self.context_switch_time = context_switch_time;
        self
    }
}

/// Result of simulating one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Algorithm that produced this run.
    pub algorithm: Algorithm,
    /// Context-switch cost used (ticks).
    pub context_switch_time: i64,
    /// Simulated process records, in input order.
    pub processes: Vec<ProcessRecord>,
    /// Number of switches between two different processes.
    pub context_switches: usize,
}

impl SimulationRun {
    /// Aggregate metrics of this run.
    pub fn metrics(&self) -> ScheduleMetrics {
        ScheduleMetrics::calculate(&self.processes)
    }

    /// Process IDs ordered by completion time.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        let mut done: Vec<&ProcessRecord> =
            self.processes.iter().filter(|p| p.is_complete()).collect();
        done.sort_by_key(|p| p.completion_time);
        done.into_iter().map(|p| p.id).collect()
    }

    /// Looks up a simulated process by ID.
    pub fn process(&self, id: ProcessId) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of simulated processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}

/// Metrics of one algorithm in a side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmReport {
    /// Algorithm evaluated.
    pub algorithm: Algorithm,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
    /// Number of context switches performed.
    pub context_switches: usize,
}

/// Single-CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessRecord;
/// use u_cpusched::scheduler::{Algorithm, SchedulingEngine};
///
/// let processes = vec![
///     ProcessRecord::new(1, 0, 5, 0).unwrap(),
///     ProcessRecord::new(2, 1, 3, 0).unwrap(),
/// ];
/// let engine = SchedulingEngine::new();
/// let run = engine
///     .run(&processes, Algorithm::RoundRobin { quantum: 2 })
///     .unwrap();
/// assert_eq!(run.completion_order(), vec![2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchedulingEngine {
    context_switch_time: i64,
}

impl SchedulingEngine {
    /// Creates an engine with zero context-switch cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the context-switch cost (ticks). Checked when a run starts.
    pub fn with_context_switch(mut self, context_switch_time: i64) -> Self {
        self.context_switch_time = context_switch_time;
        self
    }

    /// Configured context-switch cost.
    pub fn context_switch_time(&self) -> i64 {
        self.context_switch_time
    }

    /// Simulates `algorithm` on a private copy of `processes`.
    ///
    /// The input records are never modified; the returned run holds
    /// freshly reset and simulated copies.
    ///
    /// # Errors
    /// [`crate::ErrorKind::InvalidParameter`] for a negative context-switch
    /// cost or a non-positive Round Robin quantum.
    pub fn run(
        &self,
        processes: &[ProcessRecord],
        algorithm: Algorithm,
    ) -> SchedResult<SimulationRun> {
        let mut records = processes.to_vec();
        let context_switches = self.run_in_place(&mut records, algorithm)?;
        Ok(SimulationRun {
            algorithm,
            context_switch_time: self.context_switch_time,
            processes: records,
            context_switches,
        })
    }

    /// Simulates `algorithm` directly on the caller's records.
    ///
    /// Every record is reset first, so leftovers from a previous run never
    /// leak into this one. Returns the number of context switches.
    ///
    /// # Errors
    /// [`crate::ErrorKind::InvalidProcessSpec`] if two records share an ID,
    /// plus the parameter errors of [`run`](Self::run).
    pub fn run_in_place(
        &self,
        processes: &mut [ProcessRecord],
        algorithm: Algorithm,
    ) -> SchedResult<usize> {
        validate_context_switch(self.context_switch_time)?;
        algorithm.validate()?;
        validate_unique_ids(processes)?;

        for p in processes.iter_mut() {
            p.reset();
        }

        debug!(
            "simulating {} over {} processes (context switch = {})",
            algorithm,
            processes.len(),
            self.context_switch_time
        );

        let rules = algorithm.rule_engine();
        let simulation = Simulation::new(processes, self.context_switch_time);
        let (end_time, context_switches) = simulation.run(&rules, algorithm.preemption());

        debug!(
            "{} finished at t={} after {} context switches",
            algorithm, end_time, context_switches
        );
        Ok(context_switches)
    }

    /// Validates the request's specs and simulates it.
    ///
    /// The request's context-switch cost overrides the engine's.
    pub fn run_request(&self, request: &SimulationRequest) -> SchedResult<SimulationRun> {
        validate_specs(&request.processes).map_err(flatten)?;
        let processes = request
            .processes
            .iter()
            .map(|s| ProcessRecord::try_from(*s))
            .collect::<SchedResult<Vec<_>>>()?;

        let engine = Self {
            context_switch_time: request.context_switch_time,
        };
        engine.run(&processes, request.algorithm)
    }

    /// Runs all seven algorithms on the same input and reports each.
    pub fn compare(
        &self,
        processes: &[ProcessRecord],
        quantum: i64,
    ) -> SchedResult<Vec<AlgorithmReport>> {
        Algorithm::all(quantum)
            .into_iter()
            .map(|algorithm| {
                let run = self.run(processes, algorithm)?;
                Ok(AlgorithmReport {
                    algorithm,
                    metrics: run.metrics(),
                    context_switches: run.context_switches,
                })
            })
            .collect()
    }
}

/// Per-run simulation state.
struct Simulation<'a> {
    processes: &'a mut [ProcessRecord],
    /// Process indices in admission order: arrival time, then ID.
    arrivals: Vec<usize>,
    /// Next entry of `arrivals` not yet admitted.
    cursor: usize,
    /// Indices of admitted, unfinished processes.
    ready: Vec<usize>,
    context: SchedulingContext,
    /// Process that held the CPU last; `None` at start and after idling.
    last: Option<usize>,
    context_switch_time: i64,
    context_switches: usize,
}

impl<'a> Simulation<'a> {
    fn new(processes: &'a mut [ProcessRecord], context_switch_time: i64) -> Self {
        let mut arrivals: Vec<usize> = (0..processes.len()).collect();
        arrivals.sort_by_key(|&i| (processes[i].arrival_time, processes[i].id));

        Self {
            processes,
            arrivals,
            cursor: 0,
            ready: Vec::new(),
            context: SchedulingContext::at_time(0),
            last: None,
            context_switch_time,
            context_switches: 0,
        }
    }

    fn now(&self) -> i64 {
        self.context.current_time
    }

    /// Runs to completion; returns (end time, context switches).
    fn run(mut self, rules: &RuleEngine, preemption: Preemption) -> (i64, usize) {
        loop {
            self.admit_arrivals();

            let Some(idx) = self.select(rules) else {
                match self.upcoming_arrival() {
                    Some(t) => {
                        trace!("t={}: idle until {}", self.now(), t);
                        self.context.current_time = t;
                        self.last = None;
                        continue;
                    }
                    None => break,
                }
            };

            self.dispatch(idx);
            // Arrivals during the switch wait for the next decision point.
            let admitted = self.cursor;
            self.admit_arrivals();
            let arrived_during_switch = self.cursor > admitted;

            let slice = self.slice_for(idx, preemption, arrived_during_switch);
            self.context.current_time += slice;
            self.processes[idx].consume(slice);
            self.admit_arrivals();

            let id = self.processes[idx].id;
            if self.processes[idx].remaining_time == 0 {
                let now = self.now();
                self.processes[idx].finish(now);
                self.ready.retain(|&i| i != idx);
                self.context.dequeue(id);
                trace!("t={}: process {} completed", now, id);
            } else if let Preemption::Quantum(_) = preemption {
                self.context.enqueue(id);
                trace!("t={}: process {} re-enqueued", self.now(), id);
            }
            self.last = Some(idx);
        }

        (self.now(), self.context_switches)
    }

    /// Moves every process with `arrival_time <= now` into the ready set.
    fn admit_arrivals(&mut self) {
        while let Some(&idx) = self.arrivals.get(self.cursor) {
            if self.processes[idx].arrival_time > self.now() {
                break;
            }
            self.ready.push(idx);
            self.context.enqueue(self.processes[idx].id);
            self.cursor += 1;
        }
    }

    fn upcoming_arrival(&self) -> Option<i64> {
        self.arrivals
            .get(self.cursor)
            .map(|&idx| self.processes[idx].arrival_time)
    }

    fn select(&self, rules: &RuleEngine) -> Option<usize> {
        rules.select_among(&*self.processes, self.ready.iter().copied(), &self.context)
    }

    /// Hands the CPU to `idx`, charging a switch if another process ran last.
    fn dispatch(&mut self, idx: usize) {
        if let Some(prev) = self.last {
            if prev != idx {
                self.context.current_time += self.context_switch_time;
                self.context_switches += 1;
                trace!(
                    "t={}: switch {} -> {}",
                    self.now(),
                    self.processes[prev].id,
                    self.processes[idx].id
                );
            }
        }
        let now = self.now();
        self.processes[idx].mark_dispatched(now);
    }

    /// Length of the next slice for `idx`. Always positive.
    fn slice_for(&self, idx: usize, preemption: Preemption, arrived_during_switch: bool) -> i64 {
        let remaining = self.processes[idx].remaining_time;
        match preemption {
            Preemption::None => remaining,
            Preemption::OnArrival if arrived_during_switch => remaining.min(1),
            Preemption::OnArrival => match self.upcoming_arrival() {
                Some(t) => remaining.min(t - self.now()),
                None => remaining,
            },
            Preemption::Quantum(quantum) => remaining.min(quantum),
        }
    }
}
