// Dispatch Helpers - free-function submission onto a queue

use super::queue::Queue;

/// Submit `work` to `queue` and wait for it to finish
///
/// Pass-through to [`Queue::sync`]: the closure is consumed by the call,
/// runs on the calling thread once the queue admits it, and may borrow
/// locals (no `Send`, no `'static`).
pub fn dispatch_sync<R>(queue: &Queue, work: impl FnOnce() -> R) -> R {
    queue.sync(work)
}

/// Submit `work` to `queue` as a barrier and wait for it to finish
///
/// Pass-through to [`Queue::barrier_sync`]: the work runs with exclusive
/// access relative to everything else submitted to `queue`. On a serial
/// queue this is equivalent to [`dispatch_sync`].
pub fn dispatch_barrier_sync<R>(queue: &Queue, work: impl FnOnce() -> R) -> R {
    queue.barrier_sync(work)
}
