//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FCFS (earliest arrival), QUEUE (ready-queue position)
//! - **Length-based**: SJF (shortest burst), SRT (shortest remaining time)
//! - **Priority**: PRIORITY (highest priority value)
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessRecord;

// ======================== Arrival-based rules ========================

/// First Come First Served.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time
    }
}

/// Ready-queue order.
///
/// Prioritizes the process at the head of the FIFO ready queue, using
/// `context.queue_tickets`. Processes without a ticket sort behind every
/// enqueued process.
#[derive(Debug, Clone, Copy)]
pub struct QueueOrder;

impl DispatchingRule for QueueOrder {
    fn name(&self) -> &'static str {
        "QUEUE"
    }

    fn evaluate(&self, process: &ProcessRecord, context: &SchedulingContext) -> RuleScore {
        context
            .queue_ticket(process.id)
            .and_then(|ticket| i64::try_from(ticket).ok())
            .unwrap_or(i64::MAX)
    }
}

// ======================== Length-based rules ========================

/// Shortest Job First.
///
/// Prioritizes processes with the smaller total burst time.
///
/// # Reference
/// Smith (1956), optimal for mean flow time on a single machine
/// without preemption when all jobs are available.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        process.burst_time
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes processes closest to completion.
///
/// # Reference
/// Schrage (1968), SRPT is optimal for mean flow time with preemption.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        process.remaining_time
    }
}

// ======================== Priority-based rule ========================

/// Highest priority first.
///
/// Higher `priority` values are more urgent.
/// (Negated because lower score = dispatched first.)
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        -i64::from(process.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_process(id: u32, arrival: i64, burst: i64, priority: i32) -> ProcessRecord {
        ProcessRecord::new(id, arrival, burst, priority).unwrap()
    }

    #[test]
    fn test_earliest_arrival() {
        let ctx = SchedulingContext::at_time(10);
        let early = make_process(1, 2, 5, 0);
        let late = make_process(2, 7, 5, 0);
        assert!(EarliestArrival.evaluate(&early, &ctx) < EarliestArrival.evaluate(&late, &ctx));
    }

    #[test]
    fn test_queue_order() {
        let mut ctx = SchedulingContext::at_time(0);
        ctx.enqueue(2);
        ctx.enqueue(1);
        let p1 = make_process(1, 0, 5, 0);
        let p2 = make_process(2, 3, 5, 0);
        let unqueued = make_process(3, 0, 5, 0);
        // p2 entered the queue first
        assert!(QueueOrder.evaluate(&p2, &ctx) < QueueOrder.evaluate(&p1, &ctx));
        assert!(QueueOrder.evaluate(&p1, &ctx) < QueueOrder.evaluate(&unqueued, &ctx));
    }

    #[test]
    fn test_shortest_burst() {
        let ctx = SchedulingContext::at_time(0);
        let short = make_process(1, 0, 2, 0);
        let long = make_process(2, 0, 9, 0);
        assert!(ShortestBurst.evaluate(&short, &ctx) < ShortestBurst.evaluate(&long, &ctx));
    }

    #[test]
    fn test_shortest_remaining_uses_progress() {
        let ctx = SchedulingContext::at_time(0);
        let mut started = make_process(1, 0, 10, 0);
        started.remaining_time = 1;
        let fresh = make_process(2, 0, 3, 0);
        assert!(
            ShortestRemaining.evaluate(&started, &ctx) < ShortestRemaining.evaluate(&fresh, &ctx)
        );
        // Burst-based rule still sees the original length
        assert!(ShortestBurst.evaluate(&fresh, &ctx) < ShortestBurst.evaluate(&started, &ctx));
    }

    #[test]
    fn test_highest_priority() {
        let ctx = SchedulingContext::at_time(0);
        let high = make_process(1, 0, 5, 10);
        let low = make_process(2, 0, 5, 1);
        assert!(HighestPriority.evaluate(&high, &ctx) < HighestPriority.evaluate(&low, &ctx));
    }

    #[test]
    fn test_names() {
        assert_eq!(EarliestArrival.name(), "FCFS");
        assert_eq!(ShortestRemaining.name(), "SRT");
        assert_eq!(QueueOrder.name(), "QUEUE");
    }
}
