// Admission - FIFO ticket scheduling for queue slots

use std::collections::VecDeque;

/// Ticket handed out at submission time; admitted strictly in ticket order
pub(crate) type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    ticket: Ticket,
    exclusive: bool,
}

/// FIFO admission state for one queue
///
/// Pure bookkeeping: locking and blocking live in the queue runtime.
/// Invariants:
/// - tickets are issued contiguously, so the front pending entry always
///   carries ticket == `admitted`
/// - admission never overtakes: the front entry either runs or blocks
///   everything behind it
#[derive(Debug, Default)]
pub(crate) struct AdmissionState {
    next_ticket: Ticket,
    /// Tickets below this value have been admitted (running or finished)
    admitted: Ticket,
    running: usize,
    exclusive_active: bool,
    pending: VecDeque<Entry>,
}

impl AdmissionState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a submission and return its ticket
    pub(crate) fn enqueue(&mut self, exclusive: bool) -> Ticket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending.push_back(Entry { ticket, exclusive });
        ticket
    }

    /// Admit pending entries in ticket order until one cannot run
    ///
    /// A non-exclusive entry runs unless a barrier holds the queue. An
    /// exclusive entry runs only on a drained queue and then blocks
    /// admission until it finishes.
    pub(crate) fn admit_ready(&mut self) {
        while let Some(entry) = self.pending.front().copied() {
            if entry.exclusive {
                if self.running > 0 {
                    break;
                }
                self.exclusive_active = true;
            } else if self.exclusive_active {
                break;
            }
            self.running += 1;
            self.admitted = entry.ticket + 1;
            self.pending.pop_front();
        }
    }

    pub(crate) fn is_admitted(&self, ticket: Ticket) -> bool {
        ticket < self.admitted
    }

    /// Mark an admitted entry as finished and admit whatever it unblocked
    pub(crate) fn finish(&mut self, exclusive: bool) {
        debug_assert!(self.running > 0);
        self.running -= 1;
        if exclusive {
            self.exclusive_active = false;
        }
        self.admit_ready();
    }

    pub(crate) fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn running(&self) -> usize {
        self.running
    }

    pub(crate) fn exclusive_active(&self) -> bool {
        self.exclusive_active
    }
}
