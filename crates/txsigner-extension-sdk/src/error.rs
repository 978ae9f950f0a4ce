//! Registration error types.

use std::fmt;

use crate::abi::{
    STATUS_CONFLICT, STATUS_FAILED, STATUS_INVALID_ARGUMENT, STATUS_OK, STATUS_PANICKED, Status,
};

/// Error reported by a registration callback or an extension entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The name is already bound to something else
    Conflict(String),

    /// Malformed type URL or name
    InvalidArgument(String),

    /// Any other failure
    Failed(String),

    /// The entry point panicked
    Panicked,
}

impl RegistrationError {
    /// Status code carried across the ABI.
    pub fn status(&self) -> Status {
        match self {
            RegistrationError::Conflict(_) => STATUS_CONFLICT,
            RegistrationError::InvalidArgument(_) => STATUS_INVALID_ARGUMENT,
            RegistrationError::Failed(_) => STATUS_FAILED,
            RegistrationError::Panicked => STATUS_PANICKED,
        }
    }

    /// Map a status returned by a host callback back to a result.
    pub fn check(status: Status, subject: &str) -> Result<(), RegistrationError> {
        match status {
            STATUS_OK => Ok(()),
            STATUS_CONFLICT => Err(RegistrationError::Conflict(subject.to_string())),
            STATUS_INVALID_ARGUMENT => Err(RegistrationError::InvalidArgument(subject.to_string())),
            STATUS_PANICKED => Err(RegistrationError::Panicked),
            other => Err(RegistrationError::Failed(format!(
                "{} (status {})",
                subject, other
            ))),
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::Conflict(msg) => write!(f, "Registration conflict: {}", msg),
            RegistrationError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            RegistrationError::Failed(msg) => write!(f, "Registration failed: {}", msg),
            RegistrationError::Panicked => write!(f, "Extension panicked during registration"),
        }
    }
}

impl std::error::Error for RegistrationError {}
