use thiserror::Error;
use uuid::Uuid;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field [{}] {}", self.field, self.message)
    }
}

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Customer not found: {id}")]
    CustomerNotFound { id: Uuid },

    #[error("Customer with email '{email}' already exists")]
    EmailAlreadyExists { email: String },

    #[error("Validation failed: {}", .violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("; "))]
    Validation { violations: Vec<Violation> },

    /// Storage rejected an operation; `op` is the failed phase
    /// (load/insert/update/delete/search), `message` carries the cause chain.
    #[error("Error during {op}: {message}")]
    Storage { op: &'static str, message: String },
}

impl DomainError {
    pub fn customer_not_found(id: Uuid) -> Self {
        Self::CustomerNotFound { id }
    }

    pub fn email_already_exists(email: String) -> Self {
        Self::EmailAlreadyExists { email }
    }

    pub fn validation(violations: Vec<Violation>) -> Self {
        Self::Validation { violations }
    }

    pub fn storage(op: &'static str, cause: anyhow::Error) -> Self {
        Self::Storage {
            op,
            // `{:#}` renders the whole context chain, root cause included
            message: format!("{cause:#}"),
        }
    }
}
