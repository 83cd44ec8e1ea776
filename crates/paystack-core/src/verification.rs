//! Transaction Verification
//!
//! Classifies the `message` of a verify-transaction response.

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;

/// Message the gateway sends for a verified transaction
pub const VERIFICATION_SUCCESSFUL: &str = "Verification successful";

/// Message the gateway sends for an unknown reference
pub const INVALID_REFERENCE: &str = "Invalid transaction reference";

/// Outcome of a verification call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum VerificationOutcome {
    Successful,
    InvalidReference,
    /// Any other message, or none at all
    Unrecognized(Option<String>),
}

impl VerificationOutcome {
    /// Classify a status message; comparison is exact
    pub fn from_message(message: Option<&str>) -> Self {
        match message {
            Some(VERIFICATION_SUCCESSFUL) => Self::Successful,
            Some(INVALID_REFERENCE) => Self::InvalidReference,
            other => Self::Unrecognized(other.map(str::to_owned)),
        }
    }

    pub fn from_envelope(envelope: &Envelope) -> Self {
        Self::from_message(envelope.message().ok())
    }

    /// Only a successful verification is valid
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Successful)
    }
}
