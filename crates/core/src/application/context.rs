// Context - named execution scope bound to a queue

use std::sync::Arc;

use tracing::debug;

use super::queue::Queue;
use crate::domain::DomainError;
use crate::error::Result;
use crate::port::QueueBound;

/// A named execution scope serialized by its queue
///
/// A context owns no domain state of its own; whatever the submitted work
/// touches is protected by the queue's admission discipline. By default each
/// context gets a private serial queue, so all work performed through it is
/// mutually exclusive and runs in submission order.
pub struct Context {
    name: String,
    queue: Arc<Queue>,
}

impl Context {
    /// Create a context backed by its own private serial queue
    ///
    /// The queue label is derived from the name, so the name must satisfy
    /// the queue label rules.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyContextName.into());
        }
        let queue = Arc::new(Queue::serial(format!("context.{name}"))?);
        debug!(context = %name, queue = %queue.label(), "Context created");
        Ok(Self { name, queue })
    }

    /// Create a context that shares an existing queue
    ///
    /// Several contexts may be bound to one queue; their work is then
    /// scheduled against each other under that queue's discipline.
    pub fn with_queue(name: impl Into<String>, queue: Arc<Queue>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyContextName.into());
        }
        debug!(context = %name, queue = %queue.label(), "Context bound to shared queue");
        Ok(Self { name, queue })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl QueueBound for Context {
    fn queue(&self) -> &Queue {
        &self.queue
    }
}
