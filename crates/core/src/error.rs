// Central Error Type for the Library

use thiserror::Error;

/// Library-level error type
///
/// Only construction and configuration are fallible. Faults raised inside
/// submitted work are not converted into errors: they unwind to the
/// submitting caller unmodified.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
