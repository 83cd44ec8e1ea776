//! Error Types

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Gateway client error types
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Secret key or base URL missing at construction
    #[error("Configuration error: {0}")]
    Config(String),

    /// The call did not complete with a usable response
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Required input missing; raised before dispatch
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// The gateway answered, but the transaction did not verify
    #[error("Payment verification failed for '{reference}': {}", .message.as_deref().unwrap_or("no message"))]
    VerificationFailed {
        reference: String,
        message: Option<String>,
    },

    /// Response JSON lacks a field the caller relies on
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// Outgoing payload could not be encoded
    #[error("Payload encoding error: {0}")]
    Encode(serde_json::Error),
}

/// Failures raised by a [`Transport`](crate::transport::Transport)
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Gateway answered with a non-2xx status
    #[error("Gateway returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not valid JSON
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GatewayError {
    /// Check if the failure happened after dispatch, on the wire
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status reported by the gateway, if any
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Convert to a user-friendly message
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Config(_) => "Payment service is not configured.",
            Self::Transport(_) => "Could not reach the payment service. Please try again.",
            Self::Validation(_) => "Some required payment details are missing.",
            Self::VerificationFailed { .. } => "Invalid transaction reference.",
            Self::Shape(_) => "The payment service returned an unexpected response.",
            Self::Encode(_) => "Payment details could not be prepared.",
        }
    }
}

impl From<ValidationErrors> for GatewayError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_exposed() {
        let err = GatewayError::from(TransportError::Status {
            status: 401,
            message: "Invalid key".into(),
        });
        assert!(err.is_transport());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Transport error: Gateway returned 401: Invalid key");
    }

    #[test]
    fn test_verification_failed_message() {
        let err = GatewayError::VerificationFailed {
            reference: "ref_1".into(),
            message: None,
        };
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "Payment verification failed for 'ref_1': no message"
        );
    }
}
