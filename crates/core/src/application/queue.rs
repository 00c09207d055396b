// Queue Runtime - blocking submission onto an execution scope

use std::fmt;

use parking_lot::{Condvar, Mutex};
use tracing::{debug, trace, warn};

use super::admission::{AdmissionState, Ticket};
use super::current::{self, ActiveQueueGuard};
use crate::domain::{QueueConfig, QueueId, QueueKind, QueueStats};
use crate::error::Result;

/// A FIFO execution scope with blocking submission
///
/// Work always executes on the submitting thread once the queue admits it:
/// the queue is a logical ownership domain, not a dedicated thread. That is
/// what lets [`Queue::sync`] accept a borrowed closure with no `Send` or
/// `'static` bound - the closure is consumed by the call and can never
/// outlive it.
///
/// The raw primitives keep platform dispatch semantics: submitting
/// synchronously to a serial queue from a thread already executing on that
/// queue deadlocks. Re-entrant callers go through
/// [`perform_sync`](super::PerformSync::perform_sync) instead.
pub struct Queue {
    id: QueueId,
    label: String,
    kind: QueueKind,
    state: Mutex<AdmissionState>,
    admissions: Condvar,
}

impl Queue {
    pub fn new(config: QueueConfig) -> Result<Self> {
        config.validate()?;
        let queue = Self {
            id: QueueId::next(),
            label: config.label,
            kind: config.kind,
            state: Mutex::new(AdmissionState::new()),
            admissions: Condvar::new(),
        };
        debug!(queue = %queue.label, id = %queue.id, kind = ?queue.kind, "Queue created");
        Ok(queue)
    }

    /// Serial queue: one unit of work at a time, in submission order
    pub fn serial(label: impl Into<String>) -> Result<Self> {
        Self::new(QueueConfig::new(label, QueueKind::Serial))
    }

    /// Concurrent queue: submitted work may overlap, barriers exclude
    pub fn concurrent(label: impl Into<String>) -> Result<Self> {
        Self::new(QueueConfig::new(label, QueueKind::Concurrent))
    }

    pub fn id(&self) -> QueueId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> QueueKind {
        self.kind
    }

    /// Whether the calling thread is currently executing work on this queue
    pub fn is_current(&self) -> bool {
        current::is_active(self.id)
    }

    pub fn stats(&self) -> QueueStats {
        let state = self.state.lock();
        QueueStats {
            pending: state.pending_len(),
            running: state.running(),
            barrier_active: state.exclusive_active(),
        }
    }

    /// Submit `work` and wait for it to finish
    ///
    /// On a serial queue the work runs exclusively; on a concurrent queue it
    /// may overlap with other non-barrier work. The result (or panic) of
    /// `work` reaches the caller exactly as if it had been called inline.
    pub fn sync<R>(&self, work: impl FnOnce() -> R) -> R {
        self.run(matches!(self.kind, QueueKind::Serial), work)
    }

    /// Submit `work` as a barrier and wait for it to finish
    ///
    /// The barrier runs with exclusive access: nothing else submitted to
    /// this queue overlaps with it. On a serial queue this is equivalent to
    /// [`Queue::sync`].
    pub fn barrier_sync<R>(&self, work: impl FnOnce() -> R) -> R {
        self.run(true, work)
    }

    fn run<R>(&self, exclusive: bool, work: impl FnOnce() -> R) -> R {
        let ticket = self.wait_for_slot(exclusive);
        trace!(queue = %self.label, ticket, exclusive, "Slot admitted");

        // Declared in release order: the thread-local mark is popped before
        // the slot frees the queue for waiters.
        let _slot = SlotGuard {
            queue: self,
            exclusive,
            ticket,
        };
        let _mark = ActiveQueueGuard::enter(self.id);
        work()
    }

    fn wait_for_slot(&self, exclusive: bool) -> Ticket {
        let mut state = self.state.lock();
        let ticket = state.enqueue(exclusive);
        trace!(queue = %self.label, ticket, exclusive, "Slot requested");
        state.admit_ready();
        while !state.is_admitted(ticket) {
            self.admissions.wait(&mut state);
        }
        ticket
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Releases the admission slot even when the submitted work unwinds
struct SlotGuard<'a> {
    queue: &'a Queue,
    exclusive: bool,
    ticket: Ticket,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            warn!(
                queue = %self.queue.label,
                ticket = self.ticket,
                "Submitted work panicked; releasing slot"
            );
        }
        {
            let mut state = self.queue.state.lock();
            state.finish(self.exclusive);
            trace!(queue = %self.queue.label, ticket = self.ticket, "Slot finished");
        }
        self.queue.admissions.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::AppError;

    #[test]
    fn test_sync_returns_closure_result() {
        let queue = Queue::serial("test.sync").unwrap();
        let doubled = queue.sync(|| 21 * 2);
        assert_eq!(doubled, 42);
    }

    #[test]
    fn test_sync_borrows_local_state() {
        let queue = Queue::serial("test.borrow").unwrap();
        let mut log = Vec::new();
        queue.sync(|| log.push("ran"));
        assert_eq!(log, vec!["ran"]);
    }

    #[test]
    fn test_is_current_only_inside_work() {
        let queue = Queue::serial("test.current").unwrap();
        assert!(!queue.is_current());
        queue.sync(|| assert!(queue.is_current()));
        assert!(!queue.is_current());
    }

    #[test]
    fn test_barrier_sync_on_serial_queue_runs() {
        let queue = Queue::serial("test.barrier").unwrap();
        let value = queue.barrier_sync(|| 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_stats_idle() {
        let queue = Queue::concurrent("test.stats").unwrap();
        let stats = queue.stats();
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.running, 0);
        assert!(!stats.barrier_active);
    }

    #[test]
    fn test_running_visible_in_stats_during_work() {
        let queue = Queue::serial("test.stats.running").unwrap();
        queue.sync(|| {
            let stats = queue.stats();
            assert_eq!(stats.running, 1);
        });
    }

    #[test]
    fn test_invalid_label_rejected() {
        let err = Queue::serial("").unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::EmptyQueueLabel)
        ));
    }
}
