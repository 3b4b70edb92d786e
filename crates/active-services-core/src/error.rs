//! Error handling for active-services core.
//!
//! Only programming-contract and orchestration failures live here.
//! Business-rule failures are never errors: they travel as messages inside a
//! successfully built [`Outcome`](crate::domain::Outcome).

use thiserror::Error;

/// Root error type for service operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// An operation was invoked without overriding `call`.
    #[error("You must implement the public `call` method on your service object ({operation}).")]
    NotImplemented { operation: String },

    /// No operation is registered under the requested name.
    #[error("No operation registered as '{name}'")]
    UnknownOperation { name: String },

    /// A registry already holds an operation under this name.
    #[error("Operation '{name}' is already registered")]
    DuplicateOperation { name: String },

    /// A concrete operation could not finish for a reason other than
    /// validation (I/O in its dependencies, a missing collaborator, ...).
    #[error("Operation '{operation}' failed: {reason}")]
    Failed { operation: String, reason: String },
}

impl ServiceError {
    /// `NotImplemented` for the operation type `T`.
    pub fn not_implemented<T: ?Sized>() -> Self {
        Self::NotImplemented {
            operation: std::any::type_name::<T>().to_string(),
        }
    }

    pub fn failed(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotImplemented { operation } => vec![
                format!("`{operation}` still uses the default `call`"),
                "Override `Operation::call` and return `self.result(subject)`".into(),
            ],
            Self::UnknownOperation { .. } => vec![
                "Try: active-services list to see registered operations".into(),
                "Operations are derived from the models in your configuration".into(),
            ],
            Self::DuplicateOperation { name } => {
                vec![format!("Register '{name}' once, or pick a different name")]
            }
            Self::Failed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Error category for display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotImplemented { .. } => ErrorCategory::Contract,
            Self::UnknownOperation { .. } => ErrorCategory::NotFound,
            Self::DuplicateOperation { .. } => ErrorCategory::Configuration,
            Self::Failed { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The operation itself is incomplete (a bug in the caller's code).
    Contract,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ServiceResult<T> = Result<T, ServiceError>;
