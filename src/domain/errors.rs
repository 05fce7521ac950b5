//! Domain error types
//!
//! Error hierarchy for the console. All errors are domain-specific and do
//! not expose third-party types; transport failures are translated at the
//! adapter boundary.

use std::fmt;
use thiserror::Error;

/// Which remote collection an operation was talking to
///
/// Carried inside [`ServiceError`] so a degraded aggregation pass can say
/// which service let it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// User profile service
    Users,
    /// Catalog service
    Books,
    /// Borrow service
    Borrows,
    /// Fines service
    Fines,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceKind::Users => "users",
            ServiceKind::Books => "books",
            ServiceKind::Borrows => "borrows",
            ServiceKind::Fines => "fines",
        };
        f.write_str(name)
    }
}

/// Main console error type
#[derive(Debug, Error)]
pub enum CircdeskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote service errors
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Operator input that failed validation before reaching the network
    #[error("Validation error: {0}")]
    Validation(String),

    /// A lifecycle transition that is not available in the record's
    /// current state
    #[error("Invalid transition: {0}")]
    Transition(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised when talking to one of the library services
///
/// Each variant names the service involved so callers can decide whether
/// the failure concerns the primary collection or a secondary one.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Service could not be reached at all
    #[error("Failed to reach {service} service: {message}")]
    ConnectionFailed {
        /// Service that was being called
        service: ServiceKind,
        /// Transport-level detail
        message: String,
    },

    /// Request went out but no response arrived in time
    #[error("Request to {service} service timed out: {message}")]
    Timeout {
        /// Service that was being called
        service: ServiceKind,
        /// Transport-level detail
        message: String,
    },

    /// Service answered with a 4xx status
    #[error("{service} service rejected the request ({status}): {message}")]
    ClientError {
        /// Service that was being called
        service: ServiceKind,
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Service answered with a 5xx status
    #[error("{service} service failed ({status}): {message}")]
    ServerError {
        /// Service that was being called
        service: ServiceKind,
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Target record does not exist on the owning service
    #[error("{service} service has no record with id {id}")]
    NotFound {
        /// Service that was being called
        service: ServiceKind,
        /// Identifier that failed to resolve
        id: i64,
    },

    /// Response arrived but could not be decoded
    #[error("Invalid response from {service} service: {message}")]
    InvalidResponse {
        /// Service that was being called
        service: ServiceKind,
        /// Decoding detail
        message: String,
    },
}

impl ServiceError {
    /// Service this error came from
    pub fn service(&self) -> ServiceKind {
        match self {
            ServiceError::ConnectionFailed { service, .. }
            | ServiceError::Timeout { service, .. }
            | ServiceError::ClientError { service, .. }
            | ServiceError::ServerError { service, .. }
            | ServiceError::NotFound { service, .. }
            | ServiceError::InvalidResponse { service, .. } => *service,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for CircdeskError {
    fn from(err: std::io::Error) -> Self {
        CircdeskError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CircdeskError {
    fn from(err: serde_json::Error) -> Self {
        CircdeskError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CircdeskError {
    fn from(err: toml::de::Error) -> Self {
        CircdeskError::Configuration(format!("TOML parse error: {err}"))
    }
}
