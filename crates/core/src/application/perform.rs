// Re-entrant-safe synchronous perform

use tracing::debug;

use crate::port::QueueBound;

/// Synchronous perform that is safe to call from the target queue itself
///
/// Blanket-implemented for every [`QueueBound`] scope. This wraps the
/// standard [`perform_and_wait`](QueueBound::perform_and_wait) primitive
/// with re-entrancy detection: submitting from a thread already executing
/// on the queue runs the work inline instead of re-enqueueing it, so nested
/// performs never deadlock and still execute exactly once.
pub trait PerformSync: QueueBound {
    /// Run `work` on the scope's queue and return only after it finished
    ///
    /// The closure may borrow local state and needs neither `Send` nor
    /// `'static`; its result, or its panic, reaches the caller exactly as
    /// if it had been called inline.
    fn perform_sync<R>(&self, work: impl FnOnce() -> R) -> R {
        let queue = self.queue();
        if queue.is_current() {
            debug!(queue = %queue.label(), "Re-entrant perform; running inline");
            work()
        } else {
            self.perform_and_wait(work)
        }
    }
}

impl<T: QueueBound> PerformSync for T {}
