// Queue-Bound Port - execution scopes tied to a dispatch queue

use crate::application::Queue;

/// An execution scope bound to a specific queue
///
/// This is the seam the perform operations are written against: any type
/// that can name its queue gets the standard blocking perform for free.
/// Methods are generic over the work closure (which is why the trait is not
/// object-safe): the closure is borrowed for the duration of the call, never
/// boxed, and never stored.
pub trait QueueBound {
    /// The queue this scope executes on
    fn queue(&self) -> &Queue;

    /// Submit `work` to the scope's queue and wait for completion
    ///
    /// Standard primitive with platform dispatch semantics: calling it from
    /// a thread already executing on the queue deadlocks on a serial queue.
    /// Use [`perform_sync`](crate::application::PerformSync::perform_sync)
    /// wherever re-entrant calls are possible.
    fn perform_and_wait<R>(&self, work: impl FnOnce() -> R) -> R {
        self.queue().sync(work)
    }
}
