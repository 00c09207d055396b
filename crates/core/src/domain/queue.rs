// Queue Domain Model

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::constants::{MAX_QUEUE_LABEL_LEN, QUEUE_LABEL_EXTRA_CHARS};
use super::error::{DomainError, Result};

/// Process-unique queue identity
///
/// Allocated from a global counter; `Copy` so the identity of every queue a
/// thread is executing on can be tracked and compared cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueId(u64);

impl QueueId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        QueueId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Queue execution discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueKind {
    /// One unit of work at a time, in submission order
    Serial,
    /// Submitted work may overlap; barriers still get exclusive access
    Concurrent,
}

/// Queue configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    pub label: String,
    pub kind: QueueKind,
}

impl QueueConfig {
    pub fn new(label: impl Into<String>, kind: QueueKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }

    /// Validate the label: non-empty, bounded, restricted character set
    pub fn validate(&self) -> Result<()> {
        if self.label.is_empty() {
            return Err(DomainError::EmptyQueueLabel);
        }
        if self.label.len() > MAX_QUEUE_LABEL_LEN {
            return Err(DomainError::QueueLabelTooLong {
                len: self.label.len(),
                max: MAX_QUEUE_LABEL_LEN,
            });
        }
        let valid = self
            .label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || QUEUE_LABEL_EXTRA_CHARS.contains(&c));
        if !valid {
            return Err(DomainError::InvalidQueueLabel(self.label.clone()));
        }
        Ok(())
    }
}

/// Point-in-time queue usage snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Submissions waiting for admission
    pub pending: usize,
    /// Admitted submissions that have not finished
    pub running: usize,
    /// Whether a barrier currently holds the queue
    pub barrier_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_ids_are_unique() {
        let a = QueueId::next();
        let b = QueueId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_validate_label_empty() {
        let config = QueueConfig::new("", QueueKind::Serial);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_validate_label_too_long() {
        let config = QueueConfig::new("a".repeat(65), QueueKind::Serial);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_validate_label_invalid_chars() {
        let config = QueueConfig::new("invalid@label!", QueueKind::Concurrent);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("alphanumeric"));
    }

    #[test]
    fn test_validate_label_allowed_chars() {
        let config = QueueConfig::new("com.example.store_v2-main", QueueKind::Serial);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = QueueConfig::new("com.example.store", QueueKind::Concurrent);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("concurrent"));

        let back: QueueConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label, config.label);
        assert_eq!(back.kind, QueueKind::Concurrent);
    }
}
