// Lockstep Core - Dispatch queues, contexts, and synchronous perform
// NO runtime dependencies: admission is implemented in-process

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{dispatch_barrier_sync, dispatch_sync, Context, PerformSync, Queue};
pub use domain::{DomainError, QueueConfig, QueueId, QueueKind, QueueStats};
pub use error::{AppError, Result};
pub use port::QueueBound;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
