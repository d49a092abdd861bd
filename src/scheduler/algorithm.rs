//! Scheduling algorithm selection.
//!
//! Each algorithm is a pair of (rule chain, preemption mode). The rule
//! chain orders the ready set; the preemption mode bounds how long the
//! selected process may run before the next decision.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dispatching::{rules, RuleEngine, TieBreaker};
use crate::error::SchedResult;
use crate::validation::validate_quantum;

/// The seven supported CPU scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First Come First Served (non-preemptive).
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First; ties by arrival.
    SrtfFcfs,
    /// Shortest Remaining Time First; ties by priority, then arrival.
    SrtfPriority,
    /// Highest priority first, run to completion.
    PriorityNonPreemptive,
    /// Highest priority first, re-evaluated at every arrival.
    PriorityPreemptive,
    /// FIFO ready queue with a fixed time slice.
    RoundRobin {
        /// Maximum slice length (ticks). Must be positive.
        quantum: i64,
    },
}

/// When the running process may lose the CPU before it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preemption {
    /// Never; the selected process runs to completion.
    None,
    /// Whenever a new process arrives.
    OnArrival,
    /// When the time slice expires.
    Quantum(i64),
}

impl Algorithm {
    /// All seven algorithms in canonical order, Round Robin using `quantum`.
    pub fn all(quantum: i64) -> Vec<Algorithm> {
        vec![
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::SrtfFcfs,
            Algorithm::SrtfPriority,
            Algorithm::PriorityNonPreemptive,
            Algorithm::PriorityPreemptive,
            Algorithm::RoundRobin { quantum },
        ]
    }

    /// Human-readable label.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::SrtfFcfs => "SRTF (FCFS tie-break)",
            Algorithm::SrtfPriority => "SRTF (Priority tie-break)",
            Algorithm::PriorityNonPreemptive => "Priority (Non-preemptive)",
            Algorithm::PriorityPreemptive => "Priority (Preemptive)",
            Algorithm::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Preemption mode of this algorithm.
    pub fn preemption(&self) -> Preemption {
        match *self {
            Algorithm::Fcfs | Algorithm::Sjf | Algorithm::PriorityNonPreemptive => Preemption::None,
            Algorithm::SrtfFcfs | Algorithm::SrtfPriority | Algorithm::PriorityPreemptive => {
                Preemption::OnArrival
            }
            Algorithm::RoundRobin { quantum } => Preemption::Quantum(quantum),
        }
    }

    /// Whether the running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        self.preemption() != Preemption::None
    }

    /// Builds the selection rule chain. Every chain ends with the
    /// smaller-ID tie-breaker, so selection is a total order.
    pub fn rule_engine(&self) -> RuleEngine {
        let engine = match self {
            Algorithm::Fcfs => RuleEngine::new().with_rule(rules::EarliestArrival),
            Algorithm::Sjf => RuleEngine::new()
                .with_rule(rules::ShortestBurst)
                .with_rule(rules::EarliestArrival),
            Algorithm::SrtfFcfs => RuleEngine::new()
                .with_rule(rules::ShortestRemaining)
                .with_rule(rules::EarliestArrival),
            Algorithm::SrtfPriority => RuleEngine::new()
                .with_rule(rules::ShortestRemaining)
                .with_rule(rules::HighestPriority)
                .with_rule(rules::EarliestArrival),
            Algorithm::PriorityNonPreemptive | Algorithm::PriorityPreemptive => RuleEngine::new()
                .with_rule(rules::HighestPriority)
                .with_rule(rules::EarliestArrival),
            Algorithm::RoundRobin { .. } => RuleEngine::new().with_rule(rules::QueueOrder),
        };
        engine.with_final_tie_breaker(TieBreaker::ById)
    }

    /// Checks algorithm-specific parameters.
    ///
    /// # Errors
    /// [`crate::ErrorKind::InvalidParameter`] for a non-positive quantum.
    pub fn validate(&self) -> SchedResult<()> {
        match *self {
            Algorithm::RoundRobin { quantum } => validate_quantum(quantum),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin { quantum } => write!(f, "Round Robin (q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_all_in_canonical_order() {
        let all = Algorithm::all(4);
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], Algorithm::Fcfs);
        assert_eq!(all[6], Algorithm::RoundRobin { quantum: 4 });
    }

    #[test]
    fn test_preemption_modes() {
        assert_eq!(Algorithm::Fcfs.preemption(), Preemption::None);
        assert_eq!(Algorithm::Sjf.preemption(), Preemption::None);
        assert_eq!(Algorithm::PriorityNonPreemptive.preemption(), Preemption::None);
        assert_eq!(Algorithm::SrtfFcfs.preemption(), Preemption::OnArrival);
        assert_eq!(Algorithm::SrtfPriority.preemption(), Preemption::OnArrival);
        assert_eq!(Algorithm::PriorityPreemptive.preemption(), Preemption::OnArrival);
        assert_eq!(
            Algorithm::RoundRobin { quantum: 3 }.preemption(),
            Preemption::Quantum(3)
        );
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(Algorithm::RoundRobin { quantum: 3 }.is_preemptive());
    }

    #[test]
    fn test_rule_chains() {
        assert_eq!(Algorithm::Fcfs.rule_engine().rule_names(), vec!["FCFS"]);
        assert_eq!(Algorithm::Sjf.rule_engine().rule_names(), vec!["SJF", "FCFS"]);
        assert_eq!(
            Algorithm::SrtfPriority.rule_engine().rule_names(),
            vec!["SRT", "PRIORITY", "FCFS"]
        );
        assert_eq!(
            Algorithm::PriorityPreemptive.rule_engine().rule_names(),
            vec!["PRIORITY", "FCFS"]
        );
        assert_eq!(
            Algorithm::RoundRobin { quantum: 1 }.rule_engine().rule_names(),
            vec!["QUEUE"]
        );
    }

    #[test]
    fn test_validate_quantum() {
        assert!(Algorithm::RoundRobin { quantum: 1 }.validate().is_ok());
        let err = Algorithm::RoundRobin { quantum: 0 }.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidParameter);
        assert!(Algorithm::Fcfs.validate().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(Algorithm::SrtfFcfs.to_string(), "SRTF (FCFS tie-break)");
        assert_eq!(
            Algorithm::RoundRobin { quantum: 2 }.to_string(),
            "Round Robin (q=2)"
        );
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"round_robin","quantum":2}"#);

        let parsed: Algorithm = serde_json::from_str(r#"{"kind":"srtf_priority"}"#).unwrap();
        assert_eq!(parsed, Algorithm::SrtfPriority);
    }
}
