//! Rule engine for multi-key dispatching.
//!
//! Composes dispatching rules into a lexicographic comparison: the
//! primary rule decides, each following rule only breaks ties left by
//! the rules before it, and a final tie-breaker makes the order total.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, SchedulingContext};
use crate::models::ProcessRecord;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Leave the tie unresolved (earliest candidate wins).
    #[default]
    NextRule,
    /// Deterministic by process ID (smaller first).
    ById,
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine, TieBreaker};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_rule(rules::EarliestArrival)
///     .with_final_tie_breaker(TieBreaker::ById);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FCFS"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. The first rule is the primary key; each later rule
    /// is consulted only when every earlier rule ties.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the best of the `candidates` (indices into `processes`).
    ///
    /// On a full tie the earliest candidate wins.
    pub fn select_among<I>(
        &self,
        processes: &[ProcessRecord],
        candidates: I,
        context: &SchedulingContext,
    ) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates.into_iter().reduce(|best, idx| {
            if self.compare(&processes[idx], &processes[best], context) == Ordering::Less {
                idx
            } else {
                best
            }
        })
    }

    /// Lexicographic comparison over the rule chain.
    pub fn compare(
        &self,
        a: &ProcessRecord,
        b: &ProcessRecord,
        context: &SchedulingContext,
    ) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        // All rules tied → use final tie-breaker
        match self.tie_breaker {
            TieBreaker::NextRule => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn make_process(id: u32, arrival: i64, burst: i64, priority: i32) -> ProcessRecord {
        ProcessRecord::new(id, arrival, burst, priority).unwrap()
    }

    fn select_all(engine: &RuleEngine, processes: &[ProcessRecord]) -> Option<usize> {
        let ctx = SchedulingContext::at_time(0);
        engine.select_among(processes, 0..processes.len(), &ctx)
    }

    #[test]
    fn test_shortest_burst_selection() {
        let processes = vec![
            make_process(1, 0, 9, 0),
            make_process(2, 0, 2, 0),
            make_process(3, 0, 5, 0),
        ];
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(select_all(&engine, &processes), Some(1));
    }

    #[test]
    fn test_later_rule_breaks_ties() {
        let processes = vec![
            make_process(1, 3, 4, 0),
            make_process(2, 1, 4, 0), // Same burst, earlier arrival
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::EarliestArrival);
        assert_eq!(select_all(&engine, &processes), Some(1));

        // Primary key still dominates
        let processes = vec![make_process(1, 0, 5, 0), make_process(2, 9, 4, 0)];
        assert_eq!(select_all(&engine, &processes), Some(1));
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let processes = vec![make_process(7, 0, 4, 0), make_process(3, 0, 4, 0)];

        let unresolved = RuleEngine::new().with_rule(rules::EarliestArrival);
        // Full tie → first candidate kept
        assert_eq!(select_all(&unresolved, &processes), Some(0));

        let by_id = unresolved.with_final_tie_breaker(TieBreaker::ById);
        assert_eq!(select_all(&by_id, &processes), Some(1));
    }

    #[test]
    fn test_select_among_subset() {
        let processes = vec![
            make_process(1, 0, 1, 0),
            make_process(2, 0, 6, 0),
            make_process(3, 0, 3, 0),
        ];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        // Index 0 is excluded from the candidate set
        assert_eq!(engine.select_among(&processes, [1, 2], &ctx), Some(2));
        assert_eq!(engine.select_among(&processes, Vec::new(), &ctx), None);
    }

    #[test]
    fn test_large_times_compare_exactly() {
        // Adjacent values above 2^53 collapse to one f64
        let base = (1_i64 << 53) + 1;
        let processes = vec![make_process(1, base, 4, 0), make_process(2, base - 1, 4, 0)];
        let ctx = SchedulingContext::at_time(base);
        let engine = RuleEngine::new().with_rule(rules::EarliestArrival);

        assert_eq!(engine.compare(&processes[1], &processes[0], &ctx), Ordering::Less);
        assert_eq!(engine.select_among(&processes, [0, 1], &ctx), Some(1));
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestRemaining)
            .with_final_tie_breaker(TieBreaker::ById);
        let dbg = format!("{engine:?}");
        assert!(dbg.contains("SRT"));
        assert!(dbg.contains("ById"));
    }
}
