// Domain Layer - Queue models and validation

pub mod constants;
pub mod error;
pub mod queue;

// Re-exports
pub use error::DomainError;
pub use queue::{QueueConfig, QueueId, QueueKind, QueueStats};
