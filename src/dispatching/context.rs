//! Scheduling context for dispatching rule evaluation.

use std::collections::HashMap;

use crate::models::ProcessId;

/// Runtime scheduling state passed to dispatching rules.
///
/// Holds the simulation clock and the ready-queue positions used by
/// queue-ordered policies (Round Robin). Every time a process enters
/// (or re-enters) the ready queue it is issued a fresh, increasing ticket.
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    /// Current simulation time (ticks).
    pub current_time: i64,
    /// Ready-queue ticket per process (process_id → ticket).
    pub queue_tickets: HashMap<ProcessId, u64>,
    next_ticket: u64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Places a process at the back of the ready queue.
    pub fn enqueue(&mut self, process_id: ProcessId) {
        self.queue_tickets.insert(process_id, self.next_ticket);
        self.next_ticket += 1;
    }

    /// Ready-queue ticket of a process, if it has been enqueued.
    pub fn queue_ticket(&self, process_id: ProcessId) -> Option<u64> {
        self.queue_tickets.get(&process_id).copied()
    }

    /// Removes a finished process from the queue bookkeeping.
    pub fn dequeue(&mut self, process_id: ProcessId) {
        self.queue_tickets.remove(&process_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let mut ctx = SchedulingContext::at_time(0);
        ctx.enqueue(3);
        ctx.enqueue(1);
        assert_eq!(ctx.queue_ticket(3), Some(0));
        assert_eq!(ctx.queue_ticket(1), Some(1));

        // Re-entering moves the process behind everyone else.
        ctx.enqueue(3);
        assert_eq!(ctx.queue_ticket(3), Some(2));

        ctx.dequeue(1);
        assert_eq!(ctx.queue_ticket(1), None);
    }
}
