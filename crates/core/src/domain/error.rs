// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Queue label is empty")]
    EmptyQueueLabel,

    #[error("Queue label too long: {len} bytes (max {max})")]
    QueueLabelTooLong { len: usize, max: usize },

    #[error("Queue label must be alphanumeric, '.', '_' or '-': {0}")]
    InvalidQueueLabel(String),

    #[error("Context name is empty")]
    EmptyContextName,
}

pub type Result<T> = std::result::Result<T, DomainError>;
