// Thread-local tracking of the queues the current thread is executing on

use std::cell::RefCell;
use std::marker::PhantomData;

use crate::domain::QueueId;

thread_local! {
    /// Stack, not a flag: nested dispatch across different queues keeps
    /// every enclosing queue detectable.
    static ACTIVE_QUEUES: RefCell<Vec<QueueId>> = const { RefCell::new(Vec::new()) };
}

/// Marks the calling thread as executing on a queue until dropped
///
/// Guards nest LIFO and must be dropped on the thread that created them,
/// which the `!Send` marker enforces.
pub(crate) struct ActiveQueueGuard {
    id: QueueId,
    _not_send: PhantomData<*const ()>,
}

impl ActiveQueueGuard {
    pub(crate) fn enter(id: QueueId) -> Self {
        ACTIVE_QUEUES.with(|stack| stack.borrow_mut().push(id));
        Self {
            id,
            _not_send: PhantomData,
        }
    }
}

impl Drop for ActiveQueueGuard {
    fn drop(&mut self) {
        ACTIVE_QUEUES.with(|stack| {
            let popped = stack.borrow_mut().pop();
            debug_assert_eq!(popped, Some(self.id));
        });
    }
}

/// Whether the calling thread is currently executing work on `id`
pub(crate) fn is_active(id: QueueId) -> bool {
    ACTIVE_QUEUES.with(|stack| stack.borrow().contains(&id))
}
