//! Dispatching rules and rule engine for CPU selection.
//!
//! Every scheduling algorithm picks the next process from the ready set
//! by applying an ordered chain of rules: a primary key followed by
//! tie-breakers, and finally the process ID.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
//! use u_cpusched::models::ProcessRecord;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestRemaining)
//!     .with_rule(rules::EarliestArrival)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! let ready = vec![
//!     ProcessRecord::new(1, 0, 8, 0).unwrap(),
//!     ProcessRecord::new(2, 1, 4, 0).unwrap(),
//! ];
//! let context = SchedulingContext::at_time(1);
//! assert_eq!(engine.select_among(&ready, 0..ready.len(), &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are exact
/// integers, so ties are detected without tolerance.
pub type RuleScore = i64;

/// A dispatching rule that evaluates how urgently a process should run.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules for "highest X wins" keys
/// return the negated value.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process given the current scheduling context.
    fn evaluate(&self, process: &ProcessRecord, context: &SchedulingContext) -> RuleScore;
}
