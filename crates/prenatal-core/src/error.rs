//! Error types for the prenatal assistant.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the assistant workspace.
///
/// None of these variants ever escape `send_message`; the conversation layer
/// converts them into substitute assistant replies. They surface from the
/// collaborators (gateway, session store, configuration loader) and from
/// `try_send_message`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssistantError {
    /// Configuration error (missing or malformed settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote gateway could not be reached or answered with a failure status
    #[error("Gateway error: {message}")]
    Gateway {
        status: Option<u16>,
        message: String,
    },

    /// Remote gateway answered with a body we could not interpret
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Key-value storage error (session identity persistence)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// A message is already being resolved for this conversation
    #[error("Conversation is awaiting a reply")]
    Busy,
}

impl AssistantError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Gateway error without an HTTP status
    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a Gateway error carrying the HTTP status code
    pub fn gateway_status(status: u16, message: impl Into<String>) -> Self {
        Self::Gateway {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a Protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    /// Short message suitable for showing inside a conversation.
    ///
    /// Gateway errors are reduced to their message text so that status codes
    /// and error-kind prefixes stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Gateway { message, .. } => message.clone(),
            Self::Protocol(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AssistantError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

/// A type alias for `Result<T, AssistantError>`.
pub type Result<T> = std::result::Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_user_message_drops_prefix() {
        let err = AssistantError::gateway_status(502, "upstream unavailable");
        assert_eq!(err.to_string(), "Gateway error: upstream unavailable");
        assert_eq!(err.user_message(), "upstream unavailable");
        assert!(err.is_gateway());
    }

    #[test]
    fn test_io_error_becomes_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AssistantError = io.into();
        assert!(err.is_storage());
    }
}
