use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone)]
pub enum CustomersInfoError {
    #[error("Customer not found: {id}")]
    NotFound { id: Uuid },

    #[error("Customer with email '{email}' already exists")]
    Conflict { email: String },

    #[error("Validation failed: {}", .messages.join("; "))]
    Validation { messages: Vec<String> },

    #[error("Internal error")]
    Internal,
}

impl CustomersInfoError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn conflict(email: String) -> Self {
        Self::Conflict { email }
    }

    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
