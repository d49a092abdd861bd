//! Input validation for process collections and simulation parameters.
//!
//! Checks structural integrity of process descriptors before any
//! simulation. Detects:
//! - Zero (non-positive) process IDs
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//!
//! Parameter checks (quantum, context-switch time) live here as well so
//! that the engine rejects bad input before the clock starts.

use crate::error::{ErrorKind, SchedError, SchedResult};
use crate::models::{ProcessRecord, ProcessSpec};
use std::collections::HashSet;

/// Validation result. On failure, carries every detected problem.
pub type ValidationResult = Result<(), Vec<SchedError>>;

/// Validates a collection of process specs.
///
/// Checks:
/// 1. Every id is positive
/// 2. No duplicate ids
/// 3. Every arrival time is non-negative
/// 4. Every burst time is positive
///
/// An empty collection is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_specs(specs: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for spec in specs {
        if spec.id == 0 {
            errors.push(SchedError::invalid_spec("Process ID must be positive, got 0"));
        } else if !ids.insert(spec.id) {
            errors.push(SchedError::invalid_spec(format!(
                "Duplicate process ID: {}",
                spec.id
            )));
        }

        if spec.arrival_time < 0 {
            errors.push(SchedError::invalid_spec(format!(
                "Process {} has negative arrival time {}",
                spec.id, spec.arrival_time
            )));
        }

        if spec.burst_time <= 0 {
            errors.push(SchedError::invalid_spec(format!(
                "Process {} has non-positive burst time {}",
                spec.id, spec.burst_time
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that no two records share an ID.
///
/// Records built one by one with [`ProcessRecord::new`] skip the
/// collection checks of [`validate_specs`]; the engine keys ready-queue
/// state by ID, so it runs this before every simulation.
pub fn validate_unique_ids(processes: &[ProcessRecord]) -> SchedResult<()> {
    let mut ids = HashSet::with_capacity(processes.len());
    for p in processes {
        if !ids.insert(p.id) {
            return Err(SchedError::invalid_spec(format!(
                "Duplicate process ID: {}",
                p.id
            )));
        }
    }
    Ok(())
}

/// Validates the context-switch cost.
pub fn validate_context_switch(context_switch_time: i64) -> SchedResult<()> {
    if context_switch_time < 0 {
        return Err(SchedError::invalid_parameter(format!(
            "context switch time must be non-negative, got {context_switch_time}"
        )));
    }
    Ok(())
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: i64) -> SchedResult<()> {
    if quantum <= 0 {
        return Err(SchedError::invalid_parameter(format!(
            "time quantum must be positive, got {quantum}"
        )));
    }
    Ok(())
}

/// Collapses a batch of validation errors into one error of the same kind.
pub(crate) fn flatten(errors: Vec<SchedError>) -> SchedError {
    let kind = errors
        .first()
        .map(|e| e.kind)
        .unwrap_or(ErrorKind::InvalidProcessSpec);
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    SchedError::new(kind, message)
}
